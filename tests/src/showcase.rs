#![cfg(test)]
use marquee_common::config::Config;
use marquee_core::showcase::{self, Section, Showcase};

const HENRY: &str = "Henry Cavill\nAwards\n2013:\t\tBest Actor\n2014:\t\tBest Hero\n";

fn render(cfg: &Config) -> Showcase {
    let result = showcase::run(cfg);
    assert!(result.is_ok(), "Showcase failed: {:?}", result.as_ref().err());
    result.unwrap()
}

/// The summaries printed by the CLI, in order, with the default pattern.
#[test]
fn showcase_output_matches_expected_text() {
    let showcase: Showcase = render(&Config::default());

    let base = format!("Title:\t Man of Steel\nLead Actor:\t{HENRY}\nGenre:\tAction\n");
    let expected: Vec<Section> = vec![
        Section {
            title: Some(String::from("Without Dates")),
            body: base.clone(),
        },
        Section {
            title: Some(String::from("With one date")),
            body: format!("{base}Production:\t03-08-2019\n"),
        },
        Section {
            title: Some(String::from("With two dates")),
            body: format!("{base}Production:\t03-08-2019\nRelease:\t03-08-2020\n"),
        },
        Section {
            title: None,
            body: String::from(
                "Title:\t I heard the owl call my name\nLead Actor:\tTom Smith\nGenre:\tAction\n",
            ),
        },
    ];

    assert_eq!(showcase.sections, expected);
}

#[test]
fn showcase_honours_the_configured_pattern() {
    let cfg: Config = Config {
        date_pattern: String::from("d MMMM yyyy"),
        quiet: 0,
    };
    let showcase: Showcase = render(&cfg);

    let last_dates = &showcase.sections[2].body;
    assert!(
        last_dates.ends_with("Production:\t3 August 2019\nRelease:\t3 August 2020\n"),
        "Unexpected summary: {last_dates}"
    );
}

#[test]
fn showcase_cast_state() {
    let showcase: Showcase = render(&Config::default());

    let henry = &showcase.actors[0];
    let tom = &showcase.actors[1];

    assert_eq!(henry.award_count(), 2);
    assert_eq!(henry.movies().len(), 1);
    assert!(henry.movies()[0].important_dates().is_none(), "Henry holds the movie as it was when added");

    assert!(tom.movies().is_empty());
    assert_eq!(tom.description(), "Tom Smith");

    let mos = &showcase.movies[0];
    assert_eq!(mos.important_dates().map(|dates| dates.len()), Some(2));
}
