use super::agent::Agent;
use super::caller::Caller;
use super::shover::Shover;

/// Registered agents, selectable by name.
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Roster {
    #[default]
    AllIn,
    CheckCall,
}

impl Roster {
    pub const fn all() -> [Self; 2] {
        [Self::AllIn, Self::CheckCall]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AllIn => "allin",
            Self::CheckCall => "checkcall",
        }
    }
    /// A fresh instance of the selected agent.
    pub fn build(&self) -> Box<dyn Agent> {
        match self {
            Self::AllIn => Box::new(Shover),
            Self::CheckCall => Box::new(Caller),
        }
    }
}

impl std::str::FromStr for Roster {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown agent: {}. available: {}",
                    s,
                    Self::all().map(|r| r.name()).join(", ")
                )
            })
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!("allin".parse::<Roster>(), Ok(Roster::AllIn));
        assert_eq!("CheckCall".parse::<Roster>(), Ok(Roster::CheckCall));
        let err = "nit".parse::<Roster>().unwrap_err();
        assert!(err.contains("allin, checkcall"));
    }

    #[test]
    fn builds_named_agent() {
        for roster in Roster::all() {
            assert_eq!(roster.build().name(), roster.name());
        }
    }
}
