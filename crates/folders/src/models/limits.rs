//! Plan-tier quotas that gate folder operations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FolderError;

/// Named quota looked up by the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LimitKind {
    /// Maximum number of folders the user can have
    #[serde(rename = "dialogFilters")]
    DialogFilters,
    /// Maximum number of invite links per shared folder
    #[serde(rename = "chatlistInvites")]
    ChatlistInvites,
    /// Maximum number of shared chat lists
    #[serde(rename = "chatlistJoined")]
    ChatlistJoined,
}

impl LimitKind {
    pub const ALL: [LimitKind; 3] = [
        LimitKind::DialogFilters,
        LimitKind::ChatlistInvites,
        LimitKind::ChatlistJoined,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LimitKind::DialogFilters => "dialogFilters",
            LimitKind::ChatlistInvites => "chatlistInvites",
            LimitKind::ChatlistJoined => "chatlistJoined",
        }
    }

    /// Language key of the limit-reached explanation
    pub fn message_key(self) -> &'static str {
        match self {
            LimitKind::DialogFilters => "LimitReachedDialogFilters",
            LimitKind::ChatlistInvites => "LimitReachedChatlistInvites",
            LimitKind::ChatlistJoined => "LimitReachedChatlistJoined",
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LimitKind {
    type Err = FolderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LimitKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FolderError::UnknownLimit(s.to_string()))
    }
}

/// A quota with its default and premium values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LimitValue {
    pub default: usize,
    pub premium: usize,
}

/// Quotas for every limit kind plus the tier the user is on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanLimits {
    pub dialog_filters: LimitValue,
    pub chatlist_invites: LimitValue,
    pub chatlist_joined: LimitValue,
    pub is_premium: bool,
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            dialog_filters: LimitValue {
                default: 10,
                premium: 30,
            },
            chatlist_invites: LimitValue {
                default: 3,
                premium: 100,
            },
            chatlist_joined: LimitValue {
                default: 2,
                premium: 20,
            },
            is_premium: false,
        }
    }
}

impl PlanLimits {
    pub fn premium() -> Self {
        Self {
            is_premium: true,
            ..Self::default()
        }
    }

    pub fn value(&self, kind: LimitKind) -> LimitValue {
        match kind {
            LimitKind::DialogFilters => self.dialog_filters,
            LimitKind::ChatlistInvites => self.chatlist_invites,
            LimitKind::ChatlistJoined => self.chatlist_joined,
        }
    }

    /// Current quota for the user's tier
    pub fn current(&self, kind: LimitKind) -> usize {
        let value = self.value(kind);
        if self.is_premium {
            value.premium
        } else {
            value.default
        }
    }

    /// Override both tiers of one quota
    pub fn with_limit(mut self, kind: LimitKind, limit: usize) -> Self {
        let value = LimitValue {
            default: limit,
            premium: limit,
        };
        match kind {
            LimitKind::DialogFilters => self.dialog_filters = value,
            LimitKind::ChatlistInvites => self.chatlist_invites = value,
            LimitKind::ChatlistJoined => self.chatlist_joined = value,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_limit_keys() {
        assert_eq!("dialogFilters".parse::<LimitKind>().unwrap(), LimitKind::DialogFilters);
        assert_eq!("chatlistInvites".parse::<LimitKind>().unwrap(), LimitKind::ChatlistInvites);
        assert_eq!("chatlistJoined".parse::<LimitKind>().unwrap(), LimitKind::ChatlistJoined);
        assert!(matches!(
            "folders".parse::<LimitKind>(),
            Err(FolderError::UnknownLimit(key)) if key == "folders"
        ));
    }

    #[test]
    fn test_current_limit_follows_tier() {
        let free = PlanLimits::default();
        assert_eq!(free.current(LimitKind::DialogFilters), 10);
        assert_eq!(free.current(LimitKind::ChatlistJoined), 2);

        let premium = PlanLimits::premium();
        assert_eq!(premium.current(LimitKind::DialogFilters), 30);
        assert_eq!(premium.current(LimitKind::ChatlistInvites), 100);
    }

    #[test]
    fn test_with_limit_overrides_both_tiers() {
        let limits = PlanLimits::premium().with_limit(LimitKind::DialogFilters, 2);
        assert_eq!(limits.current(LimitKind::DialogFilters), 2);
    }
}
