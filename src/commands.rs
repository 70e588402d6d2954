use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "display this text.")]
    Start,
    #[command(description = "display this text.")]
    Help,
    #[command(description = "generate prompts with the current settings.")]
    Generate,
    #[command(description = "generate prompts across random categories.")]
    Random,
    #[command(description = "show the current settings.")]
    Settings,
    #[command(description = "choose the category.")]
    Category(String),
    #[command(description = "choose the theme: auto, manual, a number or any text.")]
    Theme(String),
    #[command(description = "choose the style.")]
    Style(String),
    #[command(description = "choose the mood.")]
    Mood(String),
    #[command(description = "choose standard or midjourney output.")]
    Mode(String),
    #[command(description = "choose photo or video content.")]
    Content(String),
    #[command(description = "set how many prompts to generate (1-50).")]
    Count(String),
    #[command(description = "choose the lighting.")]
    Lighting(String),
    #[command(description = "choose the composition.")]
    Composition(String),
    #[command(description = "choose the color palette.")]
    Color(String),
    #[command(description = "choose the camera.")]
    Camera(String),
    #[command(description = "choose the title language (en, tr).")]
    Locale(String),
    #[command(description = "set a Midjourney parameter: /mj NAME VALUE.")]
    Mj(String),
    #[command(description = "show the keywords of prompt N.")]
    Keywords(String),
    #[command(description = "show the SEO title of prompt N.")]
    Title(String),
    #[command(description = "export the batch: txt, detailed, csv, adobe or portfolio.")]
    Export(String),
    #[command(description = "improve prompt N with AI.")]
    Enhance(String),
    #[command(description = "create AI variations of prompt N: /variations N [count].")]
    Variations(String),
    #[command(description = "analyze prompt N with AI.")]
    Analyze(String),
    #[command(description = "choose the AI provider: /provider gemini|openai [model].")]
    Provider(String),
    #[command(description = "show AI usage, or /usage reset.")]
    Usage(String),
    #[command(description = "show system information.")]
    Info,
}
