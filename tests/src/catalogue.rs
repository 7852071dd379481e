#![cfg(test)]
use marquee_common::date::CustomDate;
use marquee_common::error::DateError;
use marquee_common::models::actor::Actor;
use marquee_common::models::award::{Award, AwardCategory};
use marquee_common::models::important_dates::DateKind;
use marquee_common::models::movie::{Genre, Movie};

/*************************************************************
                  Snapshot semantics of actors
**************************************************************/

#[test]
fn movie_built_after_awards_lists_them() {
    let mut henry = Actor::new("Henry", "Cavill");
    henry.add_award(Award::new(AwardCategory::BestActor, 2013));
    henry.add_award(Award::new(AwardCategory::BestHero, 2014));

    let mos = Movie::new("Man of Steel", "Awesome!!!", henry.clone(), Genre::Action);
    let summary = mos.short_summary();

    assert!(summary.contains("Title:\t Man of Steel"));
    assert!(summary.contains("Lead Actor:\tHenry Cavill"));
    assert!(summary.contains("Genre:\tAction"));
    assert!(summary.contains("\nAwards\n2013:\t\tBest Actor\n2014:\t\tBest Hero\n"));
}

#[test]
fn awards_added_later_do_not_reach_existing_movies() {
    let mut henry = Actor::new("Henry", "Cavill");
    let mos = Movie::new("Man of Steel", "Awesome!!!", henry.clone(), Genre::Action);

    henry.add_award(Award::new(AwardCategory::BestActor, 2013));
    henry.add_movie(mos.clone());

    assert!(!mos.short_summary().contains("Awards"));
    assert!(henry.description().contains("Awards"));
    assert_eq!(henry.movies()[0], mos);
}

#[test]
fn actor_without_awards_has_no_awards_block() {
    let tom = Actor::new("Tom", "Smith");
    let owl = Movie::new("I heard the owl call my name", "Awesome", tom.clone(), Genre::Action);

    assert_eq!(tom.description(), "Tom Smith");
    assert_eq!(
        owl.short_summary(),
        "Title:\t I heard the owl call my name\nLead Actor:\tTom Smith\nGenre:\tAction\n"
    );
}

/*************************************************************
                       Important dates
**************************************************************/

#[test]
fn dates_of_both_kinds_accumulate() {
    let mut movie = Movie::new("Dusk", "Quiet", Actor::new("Ana", "Lima"), Genre::Romance);
    movie.add_date(CustomDate::new(1, 2, 2021), DateKind::Release);
    movie.add_date(CustomDate::new(1, 2, 2020), DateKind::Production);

    assert!(movie
        .short_summary()
        .ends_with("Genre:\tRomance\nProduction:\t01-02-2020\nRelease:\t01-02-2021\n"));
}

#[test]
fn invalid_important_date_is_marked() {
    let mut movie = Movie::new("Dusk", "Quiet", Actor::new("Ana", "Lima"), Genre::Drama);
    let bad = CustomDate::new(31, 2, 2021);
    assert_eq!(bad.formatted(), Err(DateError::InvalidDate));

    movie.add_date(bad, DateKind::Production);
    assert!(movie.short_summary().ends_with("Production:\tinvalid date\n"));
}
