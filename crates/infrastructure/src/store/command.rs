use thiserror::Error;

/// The closed set of commands the store understands. Element 0 of the
/// request array names the command, case-insensitively; the rest are its
/// arguments, checked here against each variant's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { key: String, value: String },
    Get { key: String },
    Del { keys: Vec<String> },
    Exists { keys: Vec<String> },
    Keys { pattern: String },
    FlushDb,
    FlushAll,
}

/// Non-fatal command errors: the reply carries the message and the
/// connection stays open.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("wrong number of arguments for '{0}' command")]
    WrongArity(&'static str),
}

impl Command {
    pub fn parse(mut args: Vec<String>) -> Result<Self, CommandError> {
        if args.is_empty() {
            return Err(CommandError::Empty);
        }
        let rest = args.split_off(1);
        let name = args.remove(0);

        match name.to_ascii_uppercase().as_str() {
            "SET" => match <[String; 2]>::try_from(rest) {
                Ok([key, value]) => Ok(Command::Set { key, value }),
                Err(_) => Err(CommandError::WrongArity("set")),
            },
            "GET" => match <[String; 1]>::try_from(rest) {
                Ok([key]) => Ok(Command::Get { key }),
                Err(_) => Err(CommandError::WrongArity("get")),
            },
            "DEL" => {
                if rest.is_empty() {
                    Err(CommandError::WrongArity("del"))
                } else {
                    Ok(Command::Del { keys: rest })
                }
            }
            "EXISTS" => {
                if rest.is_empty() {
                    Err(CommandError::WrongArity("exists"))
                } else {
                    Ok(Command::Exists { keys: rest })
                }
            }
            "KEYS" => match <[String; 1]>::try_from(rest) {
                Ok([pattern]) => Ok(Command::Keys { pattern }),
                Err(_) => Err(CommandError::WrongArity("keys")),
            },
            "FLUSHDB" => {
                if rest.is_empty() {
                    Ok(Command::FlushDb)
                } else {
                    Err(CommandError::WrongArity("flushdb"))
                }
            }
            "FLUSHALL" => {
                if rest.is_empty() {
                    Ok(Command::FlushAll)
                } else {
                    Err(CommandError::WrongArity("flushall"))
                }
            }
            _ => Err(CommandError::Unknown(name)),
        }
    }
}
