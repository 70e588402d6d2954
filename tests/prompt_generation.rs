use proptest::prelude::*;
use stockprompt::catalog::{category, CATEGORIES};
use stockprompt::prompt::{
    generate_prompts, generate_smart_prompt, OutputMode, Settings, ThemeChoice,
    MIDJOURNEY_PREFIX, STANDARD_CLOSING_CLAUSE,
};
use stockprompt::random::{SequenceRandom, StdRandom};

proptest! {
    #[test]
    fn prop_auto_theme_comes_from_category(
        index in 0usize..7,
        seed in any::<u64>(),
        full_random in any::<bool>(),
    ) {
        let key = CATEGORIES[index].key;
        let mut rng = StdRandom::seeded(seed);
        let smart = generate_smart_prompt(key, full_random, &Settings::default(), None, &mut rng)
            .unwrap();
        prop_assert!(category(key).unwrap().themes.contains(&smart.theme.as_str()));
        prop_assert!(smart.prompt.contains(&smart.theme));
    }

    #[test]
    fn prop_full_random_categories_exist(seed in any::<u64>(), count in 1usize..20) {
        let mut settings = Settings::default();
        settings.set_prompt_count(&count.to_string()).unwrap();
        let mut rng = StdRandom::seeded(seed);
        let prompts = generate_prompts(&settings, true, &mut rng);
        prop_assert_eq!(prompts.len(), count);
        for p in &prompts {
            let cat = category(&p.category).unwrap();
            prop_assert!(cat.themes.contains(&p.theme.as_str()));
        }
    }
}

#[test]
fn business_standard_batch() {
    let settings = Settings::default();
    let mut rng = StdRandom::seeded(7);
    let prompts = generate_prompts(&settings, false, &mut rng);

    assert_eq!(prompts.len(), 5);
    for p in &prompts {
        assert_eq!(p.category, "business");
        assert_eq!(p.mode, OutputMode::Standard);
        assert!(p.prompt.starts_with("Professional stock photo of "));
        assert!(p.prompt.ends_with(STANDARD_CLOSING_CLAUSE));
    }
    let mut ids: Vec<&str> = prompts.iter().map(|p| p.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn midjourney_aspect_ratio_flag() {
    let mut settings = Settings::default();
    settings.set_output_mode("midjourney").unwrap();
    settings.midjourney.set("ar", "16:9").unwrap();
    let mut rng = SequenceRandom::constant(0.4);
    let prompts = generate_prompts(&settings, false, &mut rng);
    assert!(prompts.iter().all(|p| p.prompt.starts_with(MIDJOURNEY_PREFIX)));
    assert!(prompts.iter().all(|p| p.prompt.contains("--ar 16:9")));
    assert!(prompts.iter().all(|p| p.prompt.contains("--no ")));

    settings.midjourney.set("ar", "1:1").unwrap();
    let prompts = generate_prompts(&settings, false, &mut rng);
    assert!(prompts.iter().all(|p| !p.prompt.contains("--ar")));
}

#[test]
fn manual_keyword_used_as_theme() {
    let mut settings = Settings::default();
    settings.set_manual_keyword("vintage typewriter");
    let mut rng = SequenceRandom::constant(0.1);
    let prompts = generate_prompts(&settings, false, &mut rng);
    assert!(prompts.iter().all(|p| p.theme == "vintage typewriter"));
}

#[test]
fn unknown_category_yields_empty_batch() {
    let settings = Settings {
        selected_category: "underwater".to_string(),
        ..Settings::default()
    };
    let mut rng = SequenceRandom::constant(0.1);
    assert!(generate_prompts(&settings, false, &mut rng).is_empty());
}

#[test]
fn predefined_theme_by_index() {
    let mut settings = Settings::default();
    settings.set_theme("1").unwrap();
    assert_eq!(
        settings.theme,
        ThemeChoice::Predefined("modern workspace setup".to_string())
    );
    let mut rng = SequenceRandom::constant(0.9);
    let prompts = generate_prompts(&settings, false, &mut rng);
    assert!(prompts
        .iter()
        .all(|p| p.prompt.starts_with("Professional stock photo of modern workspace setup, ")));
}
