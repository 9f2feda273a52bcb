//! curl flag grammar
//!
//! A fixed table of recognized flags and the token-scanning loop that turns
//! a word list into a [`FlagSet`].

use tracing::debug;

use crate::errors::{ConvertError, Result};

/// What a flag does with its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Boolean switch, takes no value
    SetTrue,
    /// Single value, last occurrence wins
    Store,
    /// Repeatable value, every occurrence is kept
    Append,
}

impl Action {
    pub fn takes_value(self) -> bool {
        !matches!(self, Action::SetTrue)
    }
}

/// Flag set field a flag writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Data,
    DataUrlencode,
    DataBinary,
    Request,
    Header,
    Compressed,
    Insecure,
    User,
    Include,
    Silent,
    Proxy,
    ProxyUser,
    Form,
    Referer,
    Range,
    UnixSocket,
    Json,
}

/// One grammar entry: long names, optional short alias, action and target
#[derive(Debug, Clone, Copy)]
pub struct FlagSpec {
    pub long: &'static [&'static str],
    pub short: Option<char>,
    pub action: Action,
    pub field: Field,
}

impl FlagSpec {
    const fn new(long: &'static [&'static str], short: Option<char>, action: Action, field: Field) -> Self {
        Self { long, short, action, field }
    }
}

/// The recognized flags
pub static GRAMMAR: &[FlagSpec] = &[
    FlagSpec::new(&["--url"], None, Action::Store, Field::Url),
    FlagSpec::new(&["--data"], Some('d'), Action::Append, Field::Data),
    FlagSpec::new(&["--data-urlencode"], None, Action::Append, Field::DataUrlencode),
    FlagSpec::new(&["--data-binary", "--data-raw"], None, Action::Store, Field::DataBinary),
    FlagSpec::new(&["--request"], Some('X'), Action::Store, Field::Request),
    FlagSpec::new(&["--header"], Some('H'), Action::Append, Field::Header),
    FlagSpec::new(&["--compressed"], None, Action::SetTrue, Field::Compressed),
    FlagSpec::new(&["--insecure"], Some('k'), Action::SetTrue, Field::Insecure),
    FlagSpec::new(&["--user"], Some('u'), Action::Store, Field::User),
    FlagSpec::new(&["--include"], Some('i'), Action::SetTrue, Field::Include),
    FlagSpec::new(&["--silent"], Some('s'), Action::SetTrue, Field::Silent),
    FlagSpec::new(&["--proxy"], Some('x'), Action::Store, Field::Proxy),
    FlagSpec::new(&["--proxy-user"], Some('U'), Action::Store, Field::ProxyUser),
    FlagSpec::new(&["--form"], Some('F'), Action::Append, Field::Form),
    FlagSpec::new(&["--referer"], Some('e'), Action::Store, Field::Referer),
    FlagSpec::new(&["--range"], Some('r'), Action::Store, Field::Range),
    FlagSpec::new(&["--unix-socket"], None, Action::Store, Field::UnixSocket),
    FlagSpec::new(&["--json"], None, Action::Store, Field::Json),
];

fn find_long(name: &str) -> Option<&'static FlagSpec> {
    GRAMMAR.iter().find(|spec| spec.long.contains(&name))
}

fn find_short(c: char) -> Option<&'static FlagSpec> {
    GRAMMAR.iter().find(|spec| spec.short == Some(c))
}

/// Structured result of scanning a curl argument list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet {
    /// First positional, the literal command name
    pub command: Option<String>,
    /// Second positional
    pub url: Option<String>,
    /// Value of `--url`
    pub explicit_url: Option<String>,
    pub data: Vec<String>,
    pub data_urlencode: Vec<String>,
    pub data_binary: Option<String>,
    pub request: Option<String>,
    pub headers: Vec<String>,
    pub compressed: bool,
    pub insecure: bool,
    pub user: Option<String>,
    pub include: bool,
    pub silent: bool,
    pub proxy: Option<String>,
    pub proxy_user: Option<String>,
    pub form: Vec<String>,
    pub referer: Option<String>,
    pub range: Option<String>,
    pub unix_socket: Option<String>,
    pub json: Option<String>,
}

impl FlagSet {
    fn set_true(&mut self, field: Field) {
        match field {
            Field::Compressed => self.compressed = true,
            Field::Insecure => self.insecure = true,
            Field::Include => self.include = true,
            Field::Silent => self.silent = true,
            other => debug!(field = ?other, "Switch applied to a value field, ignored"),
        }
    }

    fn store(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Url => &mut self.explicit_url,
            Field::DataBinary => &mut self.data_binary,
            Field::Request => &mut self.request,
            Field::User => &mut self.user,
            Field::Proxy => &mut self.proxy,
            Field::ProxyUser => &mut self.proxy_user,
            Field::Referer => &mut self.referer,
            Field::Range => &mut self.range,
            Field::UnixSocket => &mut self.unix_socket,
            Field::Json => &mut self.json,
            other => {
                debug!(field = ?other, "Store applied to a list or switch field, ignored");
                return;
            }
        };
        *slot = Some(value);
    }

    fn append(&mut self, field: Field, value: String) {
        let list = match field {
            Field::Data => &mut self.data,
            Field::DataUrlencode => &mut self.data_urlencode,
            Field::Header => &mut self.headers,
            Field::Form => &mut self.form,
            other => {
                debug!(field = ?other, "Append applied to a single-valued field, ignored");
                return;
            }
        };
        list.push(value);
    }

    fn apply(&mut self, spec: &FlagSpec, value: Option<String>) {
        match (spec.action, value) {
            (Action::SetTrue, _) => self.set_true(spec.field),
            (Action::Store, Some(value)) => self.store(spec.field, value),
            (Action::Append, Some(value)) => self.append(spec.field, value),
            (_, None) => debug!(field = ?spec.field, "Value flag applied without a value, ignored"),
        }
    }

    fn push_positional(&mut self, token: String) -> Result<()> {
        if self.command.is_none() {
            self.command = Some(token);
        } else if self.url.is_none() {
            self.url = Some(token);
        } else {
            return Err(ConvertError::Usage(format!("unrecognized arguments: {}", token)));
        }
        Ok(())
    }
}

/// Scan a curl argument list (command name first) into a [`FlagSet`]
pub fn parse_flags<S: AsRef<str>>(tokens: &[S]) -> Result<FlagSet> {
    let mut flags = FlagSet::default();
    let mut iter = tokens.iter().map(|t| t.as_ref());
    let mut options_done = false;

    while let Some(token) = iter.next() {
        if options_done || token == "-" || !token.starts_with('-') {
            flags.push_positional(token.to_string())?;
            continue;
        }

        if token == "--" {
            options_done = true;
            continue;
        }

        if let Some(long) = token.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            let flag = format!("--{}", name);
            let spec = find_long(&flag)
                .ok_or_else(|| ConvertError::Usage(format!("unrecognized arguments: {}", token)))?;

            let value = match (spec.action.takes_value(), inline) {
                (false, Some(value)) => {
                    return Err(ConvertError::Usage(format!(
                        "argument {}: ignored explicit argument '{}'",
                        flag, value
                    )))
                }
                (false, None) => None,
                (true, Some(value)) => Some(value.to_string()),
                (true, None) => Some(
                    iter.next()
                        .ok_or_else(|| missing_value(&flag))?
                        .to_string(),
                ),
            };
            debug!(flag = %flag, "Matched long flag");
            flags.apply(spec, value);
            continue;
        }

        // Short flag cluster: -sk, -XPOST, -sXPOST
        let cluster = &token[1..];
        for (offset, c) in cluster.char_indices() {
            let spec = find_short(c).ok_or_else(|| {
                ConvertError::Usage(format!("unrecognized arguments: {}", token))
            })?;

            if !spec.action.takes_value() {
                debug!(flag = %c, "Matched short switch");
                flags.apply(spec, None);
                continue;
            }

            let attached = &cluster[offset + c.len_utf8()..];
            let value = if attached.is_empty() {
                iter.next()
                    .ok_or_else(|| missing_value(&format!("-{}", c)))?
                    .to_string()
            } else {
                attached.to_string()
            };
            debug!(flag = %c, "Matched short flag");
            flags.apply(spec, Some(value));
            break;
        }
    }

    Ok(flags)
}

fn missing_value(flag: &str) -> ConvertError {
    ConvertError::Usage(format!("argument {}: expected one argument", flag))
}
