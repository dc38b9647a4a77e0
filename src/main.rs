use log::{error, info};
use seq_onehot::{encode_sequences, Error};
use std::io::{self, Read, Write};

fn run<W: Write>(input: &str, out: &mut W) -> Result<(), Error> {
    let sequences: Vec<Vec<char>> = input
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect();

    let (vocabulary, matrices) = encode_sequences(&sequences)?;

    info!(
        "Encoded {} sequences over a vocabulary of {} tokens",
        matrices.len(),
        vocabulary.len()
    );

    for (index, token) in vocabulary.tokens().into_iter().enumerate() {
        writeln!(out, "{}:{}", index, token)?;
    }

    for matrix in matrices {
        writeln!(out)?;
        for row in matrix.iter_rows() {
            let cells: Vec<String> = row.iter().map(|value| format!("{}", value)).collect();
            writeln!(out, "{}", cells.join(","))?;
        }
    }

    Ok(())
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Read the input sequences from stdin, one per line
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&input, &mut out) {
        error!("Error encoding sequences: {}", e);
        std::process::exit(1);
    }
}
