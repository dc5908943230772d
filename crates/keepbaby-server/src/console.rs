//! Console command parsing.

use keepbaby_plugin_api::{EntityType, ItemType, ParseKindError};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  spawn <type> [baby|adult] [x y z] [tame <owner>] [pattern <p>]
  tame <id> <owner>
  interact <player> <id> <item> [display name...]
  kill <id> [killer]
  list
  tick [n]
  stop";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Spawn {
        entity_type: EntityType,
        baby: bool,
        position: (f64, f64, f64),
        owner: Option<String>,
        pattern: Option<String>,
    },
    Tame {
        runtime_id: u64,
        owner: String,
    },
    Interact {
        player: String,
        runtime_id: u64,
        item: ItemType,
        display_name: Option<String>,
    },
    Kill {
        runtime_id: u64,
        killer: Option<String>,
    },
    List,
    Tick {
        count: u32,
    },
    Help,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("not a number: {0}")]
    BadNumber(String),

    #[error(transparent)]
    Kind(#[from] ParseKindError),
}

fn parse_num<T: std::str::FromStr>(s: &str) -> Result<T, ConsoleError> {
    s.parse().map_err(|_| ConsoleError::BadNumber(s.to_string()))
}

fn is_spawn_option(arg: &str) -> bool {
    arg.eq_ignore_ascii_case("tame") || arg.eq_ignore_ascii_case("pattern")
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Self, ConsoleError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Err(ConsoleError::Usage("<command> [args...]"));
        };

        match command.to_ascii_lowercase().as_str() {
            "spawn" => {
                const USAGE: &str =
                    "spawn <type> [baby|adult] [x y z] [tame <owner>] [pattern <p>]";
                let entity_type = args.first().ok_or(ConsoleError::Usage(USAGE))?.parse()?;
                let (baby, rest) = match args.get(1).map(|s| s.to_ascii_lowercase()) {
                    Some(ref s) if s == "baby" => (true, &args[2..]),
                    Some(ref s) if s == "adult" => (false, &args[2..]),
                    _ => (true, &args[1..]),
                };
                let split = rest
                    .iter()
                    .position(|s| is_spawn_option(s))
                    .unwrap_or(rest.len());
                let (coords, mut options) = rest.split_at(split);
                let position = match coords {
                    [] => (0.0, 64.0, 0.0),
                    [x, y, z] => (parse_num(x)?, parse_num(y)?, parse_num(z)?),
                    _ => return Err(ConsoleError::Usage(USAGE)),
                };
                let (mut owner, mut pattern) = (None, None);
                while let [key, value, tail @ ..] = options {
                    match key.to_ascii_lowercase().as_str() {
                        "tame" if owner.is_none() => owner = Some(value.to_string()),
                        "pattern" if pattern.is_none() => {
                            pattern = Some(value.to_ascii_uppercase());
                        }
                        _ => return Err(ConsoleError::Usage(USAGE)),
                    }
                    options = tail;
                }
                if !options.is_empty() {
                    return Err(ConsoleError::Usage(USAGE));
                }
                Ok(ConsoleCommand::Spawn {
                    entity_type,
                    baby,
                    position,
                    owner,
                    pattern,
                })
            }
            "tame" => match args {
                [id, owner] => Ok(ConsoleCommand::Tame {
                    runtime_id: parse_num(id)?,
                    owner: owner.to_string(),
                }),
                _ => Err(ConsoleError::Usage("tame <id> <owner>")),
            },
            "interact" => match args {
                [player, id, item, name @ ..] => Ok(ConsoleCommand::Interact {
                    player: player.to_string(),
                    runtime_id: parse_num(id)?,
                    item: item.parse()?,
                    display_name: (!name.is_empty()).then(|| name.join(" ")),
                }),
                _ => Err(ConsoleError::Usage(
                    "interact <player> <id> <item> [display name...]",
                )),
            },
            "kill" => match args {
                [id] => Ok(ConsoleCommand::Kill {
                    runtime_id: parse_num(id)?,
                    killer: None,
                }),
                [id, killer] => Ok(ConsoleCommand::Kill {
                    runtime_id: parse_num(id)?,
                    killer: Some(killer.to_string()),
                }),
                _ => Err(ConsoleError::Usage("kill <id> [killer]")),
            },
            "list" => Ok(ConsoleCommand::List),
            "tick" => match args {
                [] => Ok(ConsoleCommand::Tick { count: 1 }),
                [n] => Ok(ConsoleCommand::Tick {
                    count: parse_num(n)?,
                }),
                _ => Err(ConsoleError::Usage("tick [n]")),
            },
            "help" | "?" => Ok(ConsoleCommand::Help),
            "stop" => Ok(ConsoleCommand::Stop),
            other => Err(ConsoleError::UnknownCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_spawn_defaults() {
        assert_eq!(
            ConsoleCommand::parse("spawn cow").unwrap(),
            ConsoleCommand::Spawn {
                entity_type: EntityType::Cow,
                baby: true,
                position: (0.0, 64.0, 0.0),
                owner: None,
                pattern: None,
            }
        );
    }

    #[test]
    fn parse_spawn_full() {
        assert_eq!(
            ConsoleCommand::parse("spawn minecraft:horse adult 1.5 70 -3").unwrap(),
            ConsoleCommand::Spawn {
                entity_type: EntityType::Horse,
                baby: false,
                position: (1.5, 70.0, -3.0),
                owner: None,
                pattern: None,
            }
        );
        assert_eq!(
            ConsoleCommand::parse("spawn pig 1 2 3").unwrap(),
            ConsoleCommand::Spawn {
                entity_type: EntityType::Pig,
                baby: true,
                position: (1.0, 2.0, 3.0),
                owner: None,
                pattern: None,
            }
        );
    }

    #[test]
    fn parse_spawn_options() {
        assert_eq!(
            ConsoleCommand::parse("spawn cat baby 1 2 3 tame Alex pattern calico").unwrap(),
            ConsoleCommand::Spawn {
                entity_type: EntityType::Cat,
                baby: true,
                position: (1.0, 2.0, 3.0),
                owner: Some("Alex".into()),
                pattern: Some("CALICO".into()),
            }
        );
        assert_eq!(
            ConsoleCommand::parse("spawn wolf TAME Steve").unwrap(),
            ConsoleCommand::Spawn {
                entity_type: EntityType::Wolf,
                baby: true,
                position: (0.0, 64.0, 0.0),
                owner: Some("Steve".into()),
                pattern: None,
            }
        );
        assert!(matches!(
            ConsoleCommand::parse("spawn cat pattern"),
            Err(ConsoleError::Usage(_))
        ));
        assert!(matches!(
            ConsoleCommand::parse("spawn cat tame A tame B"),
            Err(ConsoleError::Usage(_))
        ));
        assert!(matches!(
            ConsoleCommand::parse("spawn cat 1 2 pattern black"),
            Err(ConsoleError::Usage(_))
        ));
    }

    #[test]
    fn parse_spawn_errors() {
        assert!(matches!(
            ConsoleCommand::parse("spawn"),
            Err(ConsoleError::Usage(_))
        ));
        assert!(matches!(
            ConsoleCommand::parse("spawn dragon"),
            Err(ConsoleError::Kind(ParseKindError::UnknownEntity(_)))
        ));
        assert!(matches!(
            ConsoleCommand::parse("spawn cow baby 1 2"),
            Err(ConsoleError::Usage(_))
        ));
        assert!(matches!(
            ConsoleCommand::parse("spawn cow baby a b c"),
            Err(ConsoleError::BadNumber(_))
        ));
    }

    #[test]
    fn parse_interact_with_name() {
        assert_eq!(
            ConsoleCommand::parse("interact Steve 3 name_tag Little Bessie").unwrap(),
            ConsoleCommand::Interact {
                player: "Steve".into(),
                runtime_id: 3,
                item: ItemType::NameTag,
                display_name: Some("Little Bessie".into()),
            }
        );
    }

    #[test]
    fn parse_interact_without_name() {
        assert_eq!(
            ConsoleCommand::parse("interact Steve 3 wheat").unwrap(),
            ConsoleCommand::Interact {
                player: "Steve".into(),
                runtime_id: 3,
                item: ItemType::Wheat,
                display_name: None,
            }
        );
        assert!(ConsoleCommand::parse("interact Steve 3").is_err());
    }

    #[test]
    fn parse_kill() {
        assert_eq!(
            ConsoleCommand::parse("kill 4 Alex").unwrap(),
            ConsoleCommand::Kill {
                runtime_id: 4,
                killer: Some("Alex".into()),
            }
        );
        assert_eq!(
            ConsoleCommand::parse("kill 4").unwrap(),
            ConsoleCommand::Kill {
                runtime_id: 4,
                killer: None,
            }
        );
    }

    #[test]
    fn parse_misc() {
        assert_eq!(ConsoleCommand::parse("LIST").unwrap(), ConsoleCommand::List);
        assert_eq!(
            ConsoleCommand::parse("tick").unwrap(),
            ConsoleCommand::Tick { count: 1 }
        );
        assert_eq!(
            ConsoleCommand::parse("tick 20").unwrap(),
            ConsoleCommand::Tick { count: 20 }
        );
        assert_eq!(ConsoleCommand::parse("stop").unwrap(), ConsoleCommand::Stop);
        assert_eq!(ConsoleCommand::parse("?").unwrap(), ConsoleCommand::Help);
        assert_eq!(
            ConsoleCommand::parse("dance"),
            Err(ConsoleError::UnknownCommand("dance".into()))
        );
        assert!(ConsoleCommand::parse("   ").is_err());
    }
}
