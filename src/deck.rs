//! Flashcards and Decks

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

/// A term/definition pair
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Flashcard {
    pub term: String,
    pub definition: String,
}

impl Flashcard {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into().trim().to_string(),
            definition: definition.into().trim().to_string(),
        }
    }
}

/// Ordered collection of flashcards
///
/// A deck is never edited in place: a load or a shuffle produces a new one
/// that replaces the old wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Flashcard>,
}

impl Deck {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, `None` when out of range
    pub fn get(&self, index: usize) -> Option<&Flashcard> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Terms in deck order, what the list view shows
    pub fn terms(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.term.as_str()).collect()
    }

    /// A uniformly random permutation of this deck
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Deck {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        Deck { cards }
    }
}

impl FromIterator<Flashcard> for Deck {
    fn from_iter<I: IntoIterator<Item = Flashcard>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
