//! Process-wide printer and scanner bound to stdout and stdin.
//!
//! Both are created on first use. Holding the scanner across calls keeps the
//! unparsed tail of a numeric token available to the next read.

use std::io::{self, BufReader, Stdin, Stdout};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::printer::Printer;
use crate::scanner::Scanner;

static STDOUT: LazyLock<Mutex<Printer<Stdout>>> =
    LazyLock::new(|| Mutex::new(Printer::new(io::stdout())));

static STDIN: LazyLock<Mutex<Scanner<BufReader<Stdin>>>> =
    LazyLock::new(|| Mutex::new(Scanner::new(BufReader::new(io::stdin()))));

/// Lock, taking over a poisoned mutex.
fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with exclusive access to the stdout printer.
pub fn with_stdout<R>(f: impl FnOnce(&mut Printer<Stdout>) -> R) -> R {
    f(&mut lock(&*STDOUT))
}

/// Run `f` with exclusive access to the stdin scanner.
pub fn with_stdin<R>(f: impl FnOnce(&mut Scanner<BufReader<Stdin>>) -> R) -> R {
    f(&mut lock(&*STDIN))
}
