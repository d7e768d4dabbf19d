//! Player progression across matches: coins, rank, the daily goal, and the
//! stone skins coins can buy.

use std::collections::BTreeSet;

use crate::constants::{
    DAILY_GOAL, DEFAULT_SKIN, RANKS, REWARD_OTHER, REWARD_WIN, SKINS, XP_OTHER, XP_PER_RANK,
    XP_WIN,
};
use crate::error::ShopError;

/// Price of the skin with the given id, if it exists.
pub fn skin_price(id: &str) -> Option<u32> {
    SKINS
        .iter()
        .find(|&&(skin, _, _)| skin == id)
        .map(|&(_, _, price)| price)
}

/// Accumulated rewards for the human player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    pub coins: u32,
    /// Index into [`RANKS`].
    pub rank_level: usize,
    /// Experience toward the next rank, 0..100.
    pub rank_progress: u32,
    /// Wins counted toward today's goal.
    pub daily_wins: u32,
    /// Skins bought so far. Always contains the default skin.
    pub unlocked: BTreeSet<String>,
    /// Skin in use; recorded with every finished match.
    pub skin: String,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            coins: 0,
            rank_level: 0,
            rank_progress: 0,
            daily_wins: 0,
            unlocked: BTreeSet::from([DEFAULT_SKIN.to_string()]),
            skin: DEFAULT_SKIN.to_string(),
        }
    }
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rank_title(&self) -> &'static str {
        RANKS[self.rank_level]
    }

    pub fn owns(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Apply the rewards for a finished match.
    ///
    /// Losses and draws still pay a small amount. Experience past the rank
    /// threshold rolls over; the top rank is never exceeded.
    pub fn record_result(&mut self, victory: bool) {
        let (coins, xp) = if victory {
            (REWARD_WIN, XP_WIN)
        } else {
            (REWARD_OTHER, XP_OTHER)
        };

        self.coins += coins;
        if victory {
            self.daily_wins = (self.daily_wins + 1).min(DAILY_GOAL);
        }

        self.rank_progress += xp;
        if self.rank_progress >= XP_PER_RANK {
            self.rank_progress -= XP_PER_RANK;
            self.rank_level = (self.rank_level + 1).min(RANKS.len() - 1);
        }
    }

    /// Spend `price` coins to unlock skin `id` and switch to it.
    ///
    /// Nothing changes if the skin is already owned or unaffordable.
    pub fn buy(&mut self, id: &str, price: u32) -> Result<(), ShopError> {
        if self.owns(id) {
            return Err(ShopError::AlreadyOwned(id.to_string()));
        }
        if self.coins < price {
            return Err(ShopError::InsufficientCoins {
                price,
                coins: self.coins,
            });
        }
        self.coins -= price;
        self.unlocked.insert(id.to_string());
        self.skin = id.to_string();
        Ok(())
    }

    /// Switch to an owned skin.
    pub fn equip(&mut self, id: &str) -> Result<(), ShopError> {
        if !self.owns(id) {
            return Err(ShopError::NotOwned(id.to_string()));
        }
        self.skin = id.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewards() {
        let mut progress = Progress::new();
        progress.record_result(true);
        assert_eq!(progress.coins, 50);
        assert_eq!(progress.rank_progress, 25);
        assert_eq!(progress.daily_wins, 1);

        progress.record_result(false);
        assert_eq!(progress.coins, 60);
        assert_eq!(progress.rank_progress, 30);
        assert_eq!(progress.daily_wins, 1);
    }

    #[test]
    fn test_rank_up_rolls_over() {
        let mut progress = Progress::new();
        for _ in 0..4 {
            progress.record_result(true);
        }
        assert_eq!(progress.rank_level, 1);
        assert_eq!(progress.rank_progress, 0);
        assert_eq!(progress.rank_title(), "Window Sill");
        assert_eq!(progress.daily_wins, 3);
    }

    #[test]
    fn test_rank_is_capped() {
        let mut progress = Progress::new();
        for _ in 0..100 {
            progress.record_result(true);
        }
        assert_eq!(progress.rank_level, RANKS.len() - 1);
        assert_eq!(progress.rank_title(), "Sunbeam God");
    }

    #[test]
    fn test_starts_with_default_skin() {
        let progress = Progress::new();
        assert!(progress.owns("clay"));
        assert!(!progress.owns("wood"));
        assert_eq!(progress.skin, "clay");
        assert_eq!(skin_price("porcelain"), Some(300));
        assert_eq!(skin_price("gold"), None);
    }

    #[test]
    fn test_buy_affordable() {
        let mut progress = Progress {
            coins: 200,
            ..Progress::new()
        };
        assert_eq!(progress.buy("wood", 150), Ok(()));
        assert_eq!(progress.coins, 50);
        assert!(progress.owns("wood"));
        assert_eq!(progress.skin, "wood");
    }

    #[test]
    fn test_buy_unaffordable() {
        let mut progress = Progress {
            coins: 100,
            ..Progress::new()
        };
        assert_eq!(
            progress.buy("wood", 150),
            Err(ShopError::InsufficientCoins {
                price: 150,
                coins: 100
            })
        );
        assert_eq!(progress.coins, 100);
        assert!(!progress.owns("wood"));
        assert_eq!(progress.skin, "clay");
    }

    #[test]
    fn test_buy_twice() {
        let mut progress = Progress {
            coins: 400,
            ..Progress::new()
        };
        progress.buy("wood", 150).unwrap();
        assert_eq!(
            progress.buy("wood", 150),
            Err(ShopError::AlreadyOwned("wood".to_string()))
        );
        assert_eq!(progress.coins, 250);
        assert_eq!(
            progress.buy("clay", 0),
            Err(ShopError::AlreadyOwned("clay".to_string()))
        );
    }

    #[test]
    fn test_equip() {
        let mut progress = Progress {
            coins: 150,
            ..Progress::new()
        };
        assert!(progress.equip("wood").is_err());
        progress.buy("wood", 150).unwrap();
        progress.equip("clay").unwrap();
        assert_eq!(progress.skin, "clay");
        progress.equip("wood").unwrap();
        assert_eq!(progress.skin, "wood");
    }
}
