// ABOUTME: Motivational quote chosen once per calendar day and cached in the store
// ABOUTME: The same quote is returned for every call on the same date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitMind Contributors

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use super::store::KeyValueStore;
use crate::constants::storage_keys;
use crate::errors::AppResult;

/// Quotes the daily pick is drawn from
pub const MOTIVATIONAL_QUOTES: [&str; 10] = [
    "Your body can do it. It's your mind you have to convince.",
    "The groundwork for all happiness is good health.",
    "Take care of your body. It's the only place you have to live.",
    "A healthy outside starts from the inside.",
    "Health is not about the weight you lose, but about the life you gain.",
    "Every workout is progress, no matter how small.",
    "Consistency is the key to achieving your fitness goals.",
    "The best project you'll ever work on is you.",
    "Strong is what happens when you run out of weak.",
    "Your health is an investment, not an expense.",
];

/// Daily quote cache
pub struct DailyQuote;

impl DailyQuote {
    /// Quote for `today`, picking and storing a new one on the first call of a day
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn today<S, R>(store: &S, today: NaiveDate, rng: &mut R) -> AppResult<String>
    where
        S: KeyValueStore + ?Sized,
        R: Rng + ?Sized,
    {
        let date_key = today.format("%Y-%m-%d").to_string();
        let stored_date = store.get(storage_keys::QUOTE_DATE)?;
        if stored_date.as_deref() == Some(date_key.as_str()) {
            if let Some(quote) = store
                .get(storage_keys::DAILY_QUOTE)?
                .filter(|q| !q.is_empty())
            {
                return Ok(quote);
            }
        }

        let quote = MOTIVATIONAL_QUOTES
            .choose(rng)
            .copied()
            .unwrap_or(MOTIVATIONAL_QUOTES[0])
            .to_owned();
        store.set(storage_keys::QUOTE_DATE, date_key)?;
        store.set(storage_keys::DAILY_QUOTE, quote.clone())?;
        Ok(quote)
    }
}
