use std::path::{Path, PathBuf};
use std::{env, fs, io};

use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use smallvec::SmallVec;
use toml::map::Entry;
use toml::{Table, Value};

/// Provides a layered builder for deserializing configuration files.
#[must_use]
pub struct Builder {
    table: Result<Table>,
}

impl Builder {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            table: Ok(Table::new()),
        }
    }

    /// Adds a layer of configuration.
    ///
    /// Layers added later take precedence over earlier ones.
    pub fn add_layer<L: Layer>(mut self, source: L) -> Self {
        self.table = self.table.and_then(|mut t| {
            source.extend_table(&mut t)?;
            Ok(t)
        });
        self
    }

    /// Deserializes the configuration from the provided layers.
    pub fn build<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.table.and_then(deserialize_table)
    }
}

/// A configuration layer.
pub trait Layer {
    /// Extends a TOML table by this layer.
    fn extend_table(&self, table: &mut Table) -> Result<()>;
}

/// A TOML file configuration layer.
#[must_use]
pub struct File {
    path: PathBuf,
    required: bool,
}

impl File {
    /// Creates a new layer, loading TOML from the file at the given path.
    ///
    /// The file is required by default.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// Sets whether the file is required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// A TOML text configuration layer.
#[must_use]
pub struct TomlText<'a> {
    text: &'a str,
}

impl<'a> TomlText<'a> {
    /// Creates a new layer, parsing the text as TOML.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

/// Maps variable names to config paths, ignoring the `__` nesting rule.
type Aliases = &'static [(&'static str, &'static str)];

/// An environment variable configuration layer.
///
/// This loads every environment variable. Their names are lowercased, and
/// `__` (two underscores) separates nested keys, so `ALARM__GUILD` refers to
/// `alarm.guild`.
///
/// Names listed as aliases are instead inserted at their dotted target path.
/// Aliases are applied first, so the nested form wins when both are set.
///
/// All values are treated as strings. Values that aren't valid UTF-8 are
/// converted lossily.
#[must_use]
pub struct Env {
    aliases: Aliases,
}

impl Env {
    /// Creates a new layer.
    pub fn new() -> Self {
        Self { aliases: &[] }
    }

    /// Sets the variable aliases.
    pub fn aliases(mut self, aliases: Aliases) -> Self {
        self.aliases = aliases;
        self
    }
}

/// A `.env` file configuration layer.
///
/// Each assignment in the file is handled like an environment variable by
/// [`Env`], with the same aliases. Add it before [`Env`] so real environment
/// variables take precedence.
#[must_use]
pub struct DotEnv {
    path: PathBuf,
    aliases: Aliases,
}

impl DotEnv {
    /// Creates a new layer reading the file at the given path.
    ///
    /// The file is optional.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            aliases: &[],
        }
    }

    /// Sets the variable aliases.
    pub fn aliases(mut self, aliases: Aliases) -> Self {
        self.aliases = aliases;
        self
    }
}

impl Layer for File {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        let file = match fs::read_to_string(&self.path) {
            Ok(content) => deserialize_str_to_table(&content)
                .with_context(|| format!("failed to load config {:?}", self.path))?,
            Err(why) => {
                if !self.required && why.kind() == io::ErrorKind::NotFound {
                    return Ok(());
                }

                return Err(why).context(format!("cannot read required config {:?}", self.path));
            },
        };

        merge_tables(table, file);
        Ok(())
    }
}

impl Layer for TomlText<'_> {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        let toml = deserialize_str_to_table(self.text).context("toml str literal invalid")?;
        merge_tables(table, toml);
        Ok(())
    }
}

impl Layer for Env {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        let vars = env::vars_os().filter_map(|(key, value)| {
            // non-utf8 keys cannot refer to anything in the config
            let key = key.into_string().ok()?;

            // lossy so the value at least shows up in a later error
            let value = value
                .into_string()
                .unwrap_or_else(|o| o.to_string_lossy().into_owned());

            Some((key, value))
        });

        insert_vars(table, vars.collect(), self.aliases);
        Ok(())
    }
}

impl Layer for DotEnv {
    fn extend_table(&self, table: &mut Table) -> Result<()> {
        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(why) if why.not_found() => return Ok(()),
            Err(why) => {
                return Err(why).with_context(|| format!("cannot read env file {:?}", self.path));
            },
        };

        let vars = iter
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("env file {:?} is invalid", self.path))?;

        insert_vars(table, vars, self.aliases);
        Ok(())
    }
}

fn insert_vars(table: &mut Table, vars: Vec<(String, String)>, aliases: Aliases) {
    let (aliased, nested): (Vec<_>, Vec<_>) = vars
        .into_iter()
        .partition(|(key, _)| find_alias(aliases, key).is_some());

    for (key, value) in aliased {
        if let Some(target) = find_alias(aliases, &key) {
            let segments = target.split('.').collect::<SmallVec<[&str; 8]>>();
            insert_at(table, &segments, Value::String(value));
        }
    }

    for (mut key, value) in nested {
        key.make_ascii_lowercase();
        let segments = key.split("__").collect::<SmallVec<[&str; 8]>>();
        insert_at(table, &segments, Value::String(value));
    }
}

fn find_alias(aliases: Aliases, key: &str) -> Option<&'static str> {
    aliases
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|&(_, target)| target)
}

fn deserialize_str_to_table(text: &str) -> Result<Table> {
    toml::from_str(text).context("config toml is invalid")
}

fn deserialize_table<T>(table: Table) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(table).context("cannot deserialize config")
}

fn merge_tables(target: &mut Table, consume: Table) {
    for (key, value) in consume {
        match target.entry(key) {
            Entry::Vacant(entry) => _ = entry.insert(value),
            Entry::Occupied(mut entry) => match (entry.get_mut(), value) {
                (Value::Table(a), Value::Table(b)) => merge_tables(a, b),
                (a, b) => *a = b,
            },
        }
    }
}

fn insert_at(table: &mut Table, path: &[&str], value: Value) {
    let [first, path @ ..] = path else {
        // `split` always yields at least one segment
        return;
    };

    match table.entry(*first) {
        Entry::Vacant(entry) => _ = entry.insert(nested_value(path, value)),
        Entry::Occupied(mut entry) => match entry.get_mut() {
            Value::Table(table) if !path.is_empty() => insert_at(table, path, value),
            entry => *entry = nested_value(path, value),
        },
    }
}

fn nested_value(path: &[&str], value: Value) -> Value {
    let [first, rest @ ..] = path else {
        return value;
    };

    let mut table = Table::new();
    table.insert((*first).to_owned(), nested_value(rest, value));
    Value::Table(table)
}
