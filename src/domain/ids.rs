// Integer id newtypes shared across the domain model.
//
// The backend hands out plain integer identifiers; the newtypes keep
// them from being mixed up at compile time while serializing as bare
// numbers on the wire.

use serde::{Deserialize, Serialize};

macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }
    };
}

id_type!(
    /// Identifier of a persistent team
    TeamId
);
id_type!(
    /// Identifier of a roster
    RosterId
);
id_type!(
    /// Identifier of a division within an event edition
    DivisionId
);
id_type!(
    /// Identifier of a season
    SeasonId
);
id_type!(
    /// Identifier of a league/regional context
    ContextId
);
id_type!(
    /// Identifier of a tournament edition
    EditionId
);
id_type!(
    /// Identifier of a team registration
    RegistrationId
);

impl RosterId {
    /// Placeholder id carried by roster drafts before the server has
    /// assigned a real identifier.
    pub const UNSAVED: RosterId = RosterId(-1);
}
