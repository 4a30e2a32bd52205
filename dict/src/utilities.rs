use std::io::{self, Write};

/// Prints `prompt` and reads one line from stdin.
///
/// A closed stdin is reported as [`io::ErrorKind::UnexpectedEof`] instead of an
/// empty line, so callers that re-prompt do not spin forever.
pub fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input was closed",
        ));
    }
    Ok(line)
}
