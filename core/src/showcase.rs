//! # Showcase
//!
//! Builds a small sample catalogue and renders how a movie summary grows as
//! important dates are added to it:
//!
//! 1. "Man of Steel" before any date is known.
//! 2. After its production date.
//! 3. After its release date.
//! 4. A second movie whose lead actor has no awards and which never gets a
//!    date. This one is printed without a title.

use anyhow::Context;
use tracing::{debug, info};

use marquee_common::config::Config;
use marquee_common::date::CustomDate;
use marquee_common::models::actor::Actor;
use marquee_common::models::award::{Award, AwardCategory};
use marquee_common::models::important_dates::DateKind;
use marquee_common::models::movie::{Genre, Movie};

/// One block of output, optionally preceded by a title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: Option<String>,
    pub body: String,
}

impl Section {
    fn titled(title: &str, body: String) -> Self {
        Self {
            title: Some(String::from(title)),
            body,
        }
    }

    fn untitled(body: String) -> Self {
        Self { title: None, body }
    }
}

/// The cast built by [`run`] together with the rendered sections.
#[derive(Debug, Clone)]
pub struct Showcase {
    pub actors: Vec<Actor>,
    pub movies: Vec<Movie>,
    pub sections: Vec<Section>,
}

pub fn run(cfg: &Config) -> anyhow::Result<Showcase> {
    let pattern: &str = &cfg.date_pattern;
    let mut sections: Vec<Section> = Vec::with_capacity(4);

    let mut henry = Actor::new("Henry", "Cavill");
    henry.add_award(Award::new(AwardCategory::BestActor, 2013));
    henry.add_award(Award::new(AwardCategory::BestHero, 2014));

    let mut mos = Movie::new("Man of Steel", "Awesome!!!", henry.clone(), Genre::Action);
    henry.add_movie(mos.clone());
    debug!(actor = %henry.full_name(), movies = henry.movies().len(), "cast ready");

    sections.push(Section::titled("Without Dates", summary(&mos, pattern)?));

    mos.add_date(CustomDate::new(3, 8, 2019), DateKind::Production);
    sections.push(Section::titled("With one date", summary(&mos, pattern)?));

    mos.add_date(CustomDate::new(3, 8, 2020), DateKind::Release);
    sections.push(Section::titled("With two dates", summary(&mos, pattern)?));

    let tom = Actor::new("Tom", "Smith");
    let owl = Movie::new("I heard the owl call my name", "Awesome", tom.clone(), Genre::Action);
    sections.push(Section::untitled(summary(&owl, pattern)?));

    info!(sections = sections.len(), "showcase rendered");

    Ok(Showcase {
        actors: vec![henry, tom],
        movies: vec![mos, owl],
        sections,
    })
}

fn summary(movie: &Movie, pattern: &str) -> anyhow::Result<String> {
    movie
        .summary_with(pattern)
        .with_context(|| format!("cannot render dates of '{}' with pattern '{pattern}'", movie.title()))
}
