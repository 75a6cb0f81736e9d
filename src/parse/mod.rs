//! Parse provider interface.
//!
//! The analyzer never tokenizes, tags or parses text itself; it asks a
//! `ParseProvider` for a `ParsedDoc` and reads it through `SyntaxTree`.

pub mod doc;

pub use doc::{ParsedDoc, ParsedToken, SentenceSpan, SyntaxTree, TokenId};

use std::sync::Arc;
use anyhow::Result;
use once_cell::sync::OnceCell;

/// Something that turns raw passage text into a dependency parse.
///
/// Implementations are loaded once and shared read-only between requests.
pub trait ParseProvider: Send + Sync {
    /// Identifying name of the underlying parse model
    fn model_name(&self) -> &str;

    fn parse(&self, text: &str) -> Result<ParsedDoc>;
}

impl<P: ParseProvider + ?Sized> ParseProvider for Arc<P> {
    fn model_name(&self) -> &str {
        (**self).model_name()
    }

    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        (**self).parse(text)
    }
}

type ProviderInit<P> = Box<dyn Fn() -> Result<P> + Send + Sync>;

/// Provider that is constructed on first use and reused afterwards.
///
/// A failed load is reported to the caller and attempted again on the next
/// parse.
pub struct LazyProvider<P> {
    model_name: String,
    cell: OnceCell<P>,
    init: ProviderInit<P>,
}

impl<P: ParseProvider> LazyProvider<P> {
    pub fn new<F>(model_name: impl Into<String>, init: F) -> Self
    where
        F: Fn() -> Result<P> + Send + Sync + 'static,
    {
        Self {
            model_name: model_name.into(),
            cell: OnceCell::new(),
            init: Box::new(init),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The loaded provider, loading it if necessary
    pub fn get(&self) -> Result<&P> {
        self.cell.get_or_try_init(|| {
            log::info!("Loading parse model '{}'...", self.model_name);
            let provider = (self.init)()?;
            log::info!("Parse model '{}' ready", provider.model_name());
            Ok(provider)
        })
    }
}

impl<P: ParseProvider> ParseProvider for LazyProvider<P> {
    fn model_name(&self) -> &str {
        match self.cell.get() {
            Some(provider) => provider.model_name(),
            None => &self.model_name,
        }
    }

    fn parse(&self, text: &str) -> Result<ParsedDoc> {
        self.get()?.parse(text)
    }
}
