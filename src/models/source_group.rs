use std::borrow::Cow;

use crate::types::SourceTexts;
use crate::Error;

/// A named collection of text fields the trend aggregator scans (post bodies,
/// comment bodies, bios, ...).
///
/// `texts` may fail as a whole, in which case the group contributes nothing,
/// or yield individual entries that fail, in which case only that entry is
/// skipped.
pub trait SourceGroup {
    fn name(&self) -> &str;

    fn texts(&self) -> Result<SourceTexts<'_>, Error>;
}

/// A source group backed by already materialized strings.
#[derive(Debug, Clone, Default)]
pub struct StaticSourceGroup {
    name: String,
    texts: Vec<String>,
}

impl StaticSourceGroup {
    pub fn new<N, I, T>(name: N, texts: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            texts: texts.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

impl SourceGroup for StaticSourceGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn texts(&self) -> Result<SourceTexts<'_>, Error> {
        Ok(Box::new(
            self.texts
                .iter()
                .map(|text| Ok::<_, Error>(Cow::Borrowed(text.as_str()))),
        ))
    }
}

/// A source group whose texts are fetched from the host on every scan.
pub struct FnSourceGroup<F>
where
    F: Fn() -> Result<Vec<String>, Error>,
{
    name: String,
    fetch: F,
}

impl<F> FnSourceGroup<F>
where
    F: Fn() -> Result<Vec<String>, Error>,
{
    pub fn new(name: impl Into<String>, fetch: F) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }
}

impl<F> SourceGroup for FnSourceGroup<F>
where
    F: Fn() -> Result<Vec<String>, Error>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn texts(&self) -> Result<SourceTexts<'_>, Error> {
        let texts = (self.fetch)()?;

        Ok(Box::new(
            texts
                .into_iter()
                .map(|text| Ok::<_, Error>(Cow::<str>::Owned(text))),
        ))
    }
}
