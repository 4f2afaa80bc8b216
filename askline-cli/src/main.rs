use askline_core::{
    Collect, Confirm, FloatPrompt, IntPrompt, InputSource, Menu, PromptError, PromptSpec,
    Prompter, NamePrompt, TextPrompt, TriggerPair, UntilQuit, Validator, format,
};
use eyre::Result;
use log::info;
use std::io::Write;

fn banner() {
    println!("----------------------------------------------------");
    println!(" █████  ███████ ██   ██ ██      ██ ███    ██ ███████");
    println!("██   ██ ██      ██  ██  ██      ██ ████   ██ ██     ");
    println!("███████ ███████ █████   ██      ██ ██ ██  ██ █████  ");
    println!("██   ██      ██ ██  ██  ██      ██ ██  ██ ██ ██     ");
    println!("██   ██ ███████ ██   ██ ███████ ██ ██   ████ ███████");
    println!("            INTERACTIVE INPUT TOOLKIT               ");
    println!("                 VERSION:    0.1.0                  ");
    println!("----------------------------------------------------");
}

fn main() -> Result<()> {
    env_logger::init();
    info!("starting askline demo");

    banner();
    let mut prompter = Prompter::console();

    let name = NamePrompt::new("Your name").read(&mut prompter)?;
    prompter.print(&format!("Welcome, {}.", name), 0)?;

    let demos = [
        "Collect numbers until a blank line",
        "Collect words while you confirm",
        "Rate the toolkit",
        "Pick a fruit",
    ];
    let menu = Menu::new("Pick a demo", &demos)?;

    UntilQuit::new(TriggerPair::default())
        .with_words("run another demo", "quit")
        .prompt_first()
        .run(&mut prompter, |p| {
            match menu.read_index(p)? {
                Some(0) => collect_numbers(p),
                Some(1) => collect_words(p),
                Some(2) => rate_toolkit(p),
                _ => pick_fruit(p),
            }
        })?;

    prompter.print("Bye.", 0)?;
    Ok(())
}

fn collect_numbers<R: InputSource, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let numbers = Collect::new().sentinel_stop().counted().run(prompter, |p| {
        IntPrompt::new("Value (blank to stop)")
            .with_indent(1)
            .allow_blank(true)
            .read(p)
    })?;
    let total: i64 = numbers.iter().sum();
    prompter.print(&format!("Collected {:?}, total {}", numbers, total), 0)
}

fn collect_words<R: InputSource, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let words = Collect::new().run(prompter, |p| {
        TextPrompt::new("Word")
            .with_indent(1)
            .bounded(1, 24)
            .read(p)
            .map(Some)
    })?;
    prompter.print(&format!("You said: {}", words.join(" ")), 0)
}

fn rate_toolkit<R: InputSource, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    if let Some(score) = FloatPrompt::new("Score")
        .bounded(0.0, 10.0)
        .read(prompter)?
    {
        prompter.print(&format!("You rated it {}.", format::one_decimal(score)), 0)?;
    }
    let recommend = Confirm::new("Would you recommend it").strict().read(prompter)?;
    prompter.print(if recommend.is_yes() { "Appreciated." } else { "Noted." }, 0)
}

fn pick_fruit<R: InputSource, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    let spec = PromptSpec::new("Pick a fruit (banana/orange)")
        .with_validator(Validator::OneOf(vec![
            "banana".to_string(),
            "orange".to_string(),
        ]))
        .with_invalid("banana or orange");
    let fruit = prompter.ask(&spec)?;
    prompter.print(&format!("Good choice: {}", fruit), 0)
}
