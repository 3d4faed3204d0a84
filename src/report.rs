use numread::{RecognizeError, RecognizeVerbose};
use std::time::Duration;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &RecognizeVerbose, color: bool, verbose: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Recognizing: \"{}\"", res.text.trim()), ansi::CYAN)));

    if verbose {
        println!("\n{}", palette.paint("━━━ Groups ━━━", ansi::GRAY));
        for (idx, group) in res.details.groups.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{}]", idx), ansi::GRAY),
                palette.paint(&group.text, ansi::BLUE),
                palette.dim("→"),
                group.candidates.join(", "),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    match &res.phone_numbers {
        Some(phones) => {
            for (idx, phone) in phones.iter().enumerate() {
                let (tag, tint) =
                    if phone.is_valid() { ("VALID", ansi::GREEN) } else { ("INVALID", ansi::RED) };
                println!(
                    "  {} {} {} {} {}",
                    palette.paint(format!("[{}]", idx), ansi::GRAY),
                    palette.bold(palette.paint(phone.interpretation(), tint)),
                    palette.dim("│"),
                    palette.paint(phone.country().to_string(), ansi::BLUE),
                    palette.paint(format!("[phone number: {tag}]"), tint),
                );
            }
        }
        None => {
            for (idx, interpretation) in res.interpretations.iter().enumerate() {
                println!(
                    "  {} {}",
                    palette.paint(format!("[{}]", idx), ansi::GRAY),
                    palette.bold(palette.paint(interpretation, ansi::GREEN)),
                );
            }
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    if verbose {
        let t = &res.details.timings;
        println!(
            "  Total: {}  │  Split: {}  │  Interpret: {}  │  Combine: {}  │  Validate: {}",
            palette.paint(format!("{:?}", t.total), ansi::GREEN),
            palette.dim(format!("{:?}", t.split)),
            palette.paint(format!("{:?}", t.interpret), ansi::CYAN),
            palette.paint(format!("{:?}", t.combine), ansi::CYAN),
            palette.dim(format!("{:?}", t.validate)),
        );
    } else {
        println!("  Done in: {}", palette.paint(format!("{:?}", res.elapsed), ansi::GREEN));
    }
    println!();
}

pub fn print_error(input: &str, err: &RecognizeError, elapsed: Duration, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Recognizing: \"{}\"", input.trim()), ansi::CYAN)));
    eprintln!("\n  {} {}", palette.paint("error:", ansi::RED), err);
    if matches!(err, RecognizeError::InputFormat { .. }) {
        eprintln!("  {}", palette.paint("Expected digit groups separated by single spaces, e.g. \"2 10 6 9\"", ansi::YELLOW));
    }
    eprintln!("\n  Done in: {}\n", palette.dim(format!("{:?}", elapsed)));
}
