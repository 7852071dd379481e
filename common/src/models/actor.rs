use std::collections::BTreeMap;

use crate::models::award::{Award, AwardKey};
use crate::models::movie::Movie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    first_name: String,
    last_name: String,
    movies: Vec<Movie>,
    awards: BTreeMap<AwardKey, Award>,
}

impl Actor {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            movies: Vec::new(),
            awards: BTreeMap::new(),
        }
    }

    /// Appends to the filmography. Movies already holding a copy of this actor
    /// are not affected.
    pub fn add_movie(&mut self, movie: Movie) {
        self.movies.push(movie);
    }

    /// Stores the award, replacing one with the same category and year.
    pub fn add_award(&mut self, award: Award) {
        self.awards.insert(award.key(), award);
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn awards(&self) -> impl Iterator<Item = &Award> {
        self.awards.values()
    }

    pub fn award_count(&self) -> usize {
        self.awards.len()
    }

    /// The full name, followed by an `Awards` block when the actor has any.
    ///
    /// ```text
    /// Henry Cavill
    /// Awards
    /// 2013:		Best Actor
    /// ```
    pub fn description(&self) -> String {
        let mut result = self.full_name();

        if !self.awards.is_empty() {
            result.push_str("\nAwards\n");
            for award in self.awards.values() {
                result.push_str(&format!("{}:\t\t{}\n", award.year(), award.category()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::award::AwardCategory;
    use crate::models::movie::Genre;

    #[test]
    fn description_without_awards_is_the_name() {
        let tom = Actor::new("Tom", "Smith");
        assert_eq!(tom.description(), "Tom Smith");
        assert!(!tom.description().contains("Awards"));
    }

    #[test]
    fn description_lists_awards() {
        let mut henry = Actor::new("Henry", "Cavill");
        henry.add_award(Award::new(AwardCategory::BestHero, 2014));
        henry.add_award(Award::new(AwardCategory::BestActor, 2013));
        assert_eq!(
            henry.description(),
            "Henry Cavill\nAwards\n2013:\t\tBest Actor\n2014:\t\tBest Hero\n"
        );
    }

    #[test]
    fn same_category_and_year_replaces() {
        let mut henry = Actor::new("Henry", "Cavill");
        henry.add_award(Award::new(AwardCategory::BestActor, 2013));
        henry.add_award(Award::new(AwardCategory::BestActor, 2013));
        assert_eq!(henry.award_count(), 1);

        henry.add_award(Award::new(AwardCategory::BestActor, 2014));
        henry.add_award(Award::new(AwardCategory::BestPicture, 2013));
        assert_eq!(henry.award_count(), 3);

        let stored: Vec<Award> = henry.awards().copied().collect();
        assert!(stored.contains(&Award::new(AwardCategory::BestActor, 2013)));
    }

    #[test]
    fn movies_keep_insertion_order() {
        let mut tom = Actor::new("Tom", "Smith");
        let owl = Movie::new("Owl", "Awesome", tom.clone(), Genre::Drama);
        let dusk = Movie::new("Dusk", "Quiet", tom.clone(), Genre::Romance);
        tom.add_movie(owl);
        tom.add_movie(dusk);

        let titles: Vec<&str> = tom.movies().iter().map(Movie::title).collect();
        assert_eq!(titles, vec!["Owl", "Dusk"]);
    }
}
