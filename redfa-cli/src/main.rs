use clap::Parser;
use std::io::{self, BufRead, Write};

/// Interactive regular expression matcher. Each entered pattern is compiled
/// to a minimal DFA, which then decides for every test string whether it is
/// in the pattern's language.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Don't print the introductory banner
    #[arg(long)]
    quiet: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if !args.quiet {
        print_banner();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter a regular expression. Type \"quit\" to quit: ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let pattern = line?;
        if pattern == "quit" {
            break;
        }

        let dfa = match redfa::compile(&pattern) {
            Ok(dfa) => dfa,
            Err(e) => {
                eprintln!("Invalid regex: {e}");
                continue;
            }
        };

        println!(
            "Enter the strings to be matched against \"{pattern}\" (one per line). \
             Type \"quit\" to quit."
        );
        for line in lines.by_ref() {
            let input = line?;
            if input == "quit" {
                break;
            }
            if dfa.accepts(&input) {
                println!("accepted");
            } else {
                println!("not accepted");
            }
        }
    }

    Ok(())
}

fn print_banner() {
    println!("redfa - a regular expression matching program");
    println!();
    println!("A regular expression is, recursively:");
    println!("  - a single character");
    println!("  - a bracket expression");
    println!("  - a parenthesized regular expression \"(Expr)\"");
    println!("  - the closure of a regular expression \"Expr*\"");
    println!("  - the concatenation of two regular expressions \"ExprExpr\"");
    println!("  - the alternation of two regular expressions \"Expr|Expr\"");
    println!();
    println!("A single character is one of the printable ascii values 33-126,");
    println!("or one of the escapes '\\(', '\\)', '\\[', '\\]', '\\*', '\\|', '\\\\'");
    println!("and '\\s' (space). Literal blanks in the pattern are ignored; use");
    println!("'\\s' to match a space. Other whitespace (tab, newline) is invalid.");
    println!();
    println!("Operators bind in this order, tightest first:");
    println!("  ()   *   concatenation   |");
    println!();
    println!("Ex: \"a*\" matches \"\", \"a\" and \"aa\", but not \"b\" or \"aaab\".");
    println!();
    println!("A bracket expression is a list of characters and ranges in square");
    println!("brackets: [a-zJKL] matches any lowercase letter or J, K, L. If the");
    println!("first character is '^', the expression matches every printable");
    println!("character not listed. Metacharacters lose their meaning inside the");
    println!("brackets; to include a literal ']', place it first, and to include");
    println!("a literal '-', place it last.");
    println!();
}
