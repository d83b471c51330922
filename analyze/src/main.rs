//! Lemmatizes Hebrew words read from standard input.
//!
//! Reads one word per line, analyzes it against an hspell dictionary
//! folder, and prints the result in the chosen output format.

use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use hebmorph::{Dictionary, Lemmatizer, LoadOptions};

use clap::Parser;

#[derive(Clone, Debug)]
enum OutputMode {
    Lemma,
    Detail,
    Correct,
}

impl FromStr for OutputMode {
    type Err = &'static str;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "lemma" => Ok(Self::Lemma),
            "detail" => Ok(Self::Detail),
            "correct" => Ok(Self::Correct),
            _ => Err("Could not parse a mode"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "analyze", about = "Lemmatizes Hebrew words")]
struct Args {
    /// Path of an hspell dictionary folder.
    #[clap(short = 'i', long)]
    hspell_dir: PathBuf,

    /// Output mode. Choices are lemma, detail, and correct.
    #[clap(short = 'O', long, default_value = "lemma")]
    output_mode: OutputMode,

    /// Tolerates vowel-letter spelling variation.
    #[clap(short = 't', long)]
    tolerant: bool,

    /// Accepts the interrogative he as a prefix on verbs.
    #[clap(short = 'H', long)]
    he_hasheela: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let opts = LoadOptions {
        morphology: true,
        allow_he_hasheela: args.he_hasheela,
    };
    let dict = Dictionary::from_hspell_dir(&args.hspell_dir, opts)?;
    let lemmatizer = Lemmatizer::new(dict);

    eprintln!("Ready to lemmatize");

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let tokens = if args.tolerant {
            lemmatizer.lemmatize_tolerant(word)
        } else {
            lemmatizer.lemmatize(word)
        };
        match args.output_mode {
            OutputMode::Lemma => match tokens {
                Some(tokens) => writeln!(&mut out, "{}\t{}", word, tokens[0].lemma())?,
                None => writeln!(&mut out, "{word}\t*")?,
            },
            OutputMode::Detail => {
                for t in tokens.iter().flatten() {
                    writeln!(
                        &mut out,
                        "{}\tlemma={}\tprefix_len={}\tmask={:#x}\tscore={:.2}",
                        t.word(),
                        t.lemma(),
                        t.prefix_length(),
                        t.mask(),
                        t.score(),
                    )?;
                }
                out.write_all(b"EOS\n")?;
            }
            OutputMode::Correct => {
                if tokens.is_some() {
                    writeln!(&mut out, "{word}\tok")?;
                } else {
                    let suggestions = lemmatizer.try_correct(word);
                    writeln!(&mut out, "{}\t{}", word, suggestions.join(" "))?;
                }
            }
        }
    }
    out.flush()?;

    Ok(())
}
