use crowdinput::{InputSequence, ParseDetails, TokenSlot};

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

/// One line per message: the sequence, or why it was rejected.
pub fn print_outcome(text: &str, outcome: Option<&InputSequence>, color: bool) {
    let palette = ansi::Palette::new(color);
    match outcome {
        Some(sequence) => println!(
            "{} {} {}",
            palette.paint(format!("{text:?}"), ansi::CYAN),
            palette.dim("→"),
            palette.paint(sequence.to_string(), ansi::GREEN)
        ),
        None => println!(
            "{} {} {}",
            palette.paint(format!("{text:?}"), ansi::CYAN),
            palette.dim("→"),
            palette.paint("rejected", ansi::RED)
        ),
    }
}

/// Full trace of a bare parse. `outcome` is the result of the configured
/// stack, which may still reject what the bare layer accepted.
pub fn print_run(details: &ParseDetails, outcome: Option<&InputSequence>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", details.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));
    print_tokens(details, &palette);

    println!("\n{}", palette.paint("━━━ Sets ━━━", ansi::GRAY));
    print_sets(details, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match (&details.result, &details.rejection) {
        (Some(sequence), _) => {
            println!("  {} {}", palette.dim("grammar:"), palette.paint(sequence.to_string(), ansi::GREEN));
            println!("  {} {}", palette.dim("chat:"), sequence.to_representation(true));
        }
        (None, Some(rejection)) => {
            println!("  {} {}", palette.dim("grammar:"), palette.paint(rejection.to_string(), ansi::RED));
        }
        (None, None) => println!("  {}", palette.dim("grammar: no result")),
    }
    match outcome {
        Some(sequence) => println!("  {} {}", palette.dim("final:"), palette.paint(sequence.to_string(), ansi::GREEN)),
        None => {
            println!("  {} {}", palette.dim("final:"), palette.paint("rejected", ansi::RED));
            if details.result.is_some() {
                println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
                println!("  • Same button or same outcome twice in one set");
                println!("  • Conflicting buttons, or a lone button combined with others");
                println!("  • Several touches without multitouch");
                println!("\n{}", palette.dim("  Tip: Set RUST_LOG=crowdinput=debug to see the exact violation"));
            }
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Match: {}  │  Assemble: {}",
        palette.paint(format!("{:?}", details.timings.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.timings.matching), ansi::CYAN),
        palette.dim(format!("{:?}", details.timings.assembly)),
    );
    println!();
}

fn print_tokens(details: &ParseDetails, palette: &ansi::Palette) {
    if details.tokens.is_empty() {
        println!("{}", palette.dim("  No tokens matched"));
        return;
    }
    for token in &details.tokens {
        let slot = match token.slot {
            TokenSlot::Leading => "lead",
            TokenSlot::Additional => "+",
        };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("{}..{}", token.start, token.end), ansi::YELLOW),
            palette.bold(palette.paint(&token.text, ansi::GREEN)),
            palette.dim(format!("│ {slot} │")),
            palette.paint(&token.definition, ansi::BLUE),
        );
    }
}

fn print_sets(details: &ParseDetails, palette: &ansi::Palette) {
    if details.sets.is_empty() {
        println!("{}", palette.dim("  No sets matched"));
        return;
    }
    for (idx, &(start, end)) in details.sets.iter().enumerate() {
        let mut extras = Vec::new();
        if details.holds.iter().any(|&offset| start <= offset && offset < end) {
            extras.push("held".to_string());
        }
        if let Some(&(_, count)) = details.repeats.iter().find(|&&(offset, _)| start <= offset && offset < end) {
            extras.push(format!("×{count}"));
        }
        println!(
            "  {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.paint(format!("span {start}..{end}"), ansi::YELLOW),
            palette.paint(extras.join(" "), ansi::CYAN),
        );
    }
}
