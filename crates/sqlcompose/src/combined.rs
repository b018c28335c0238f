//! Ordered component lists shared by functions and list clauses.

use crate::expr::Expr;
use crate::param::ParamList;

/// An ordered list of component expressions with an accumulated parameter set.
///
/// Parameters grow as components are added and are only reset by
/// [`Components::clear`]. Removing a component keeps its parameters, since a
/// sibling component may reference the same handle.
#[derive(Clone, Debug, Default)]
pub struct Components {
    items: Vec<Expr>,
    params: ParamList,
    allow_duplicates: bool,
}

impl Components {
    /// A list that skips components whose text is already present.
    pub fn unique() -> Self {
        Self::default()
    }

    /// A list that keeps repeated components (function arguments).
    pub fn with_duplicates() -> Self {
        Self {
            allow_duplicates: true,
            ..Self::default()
        }
    }

    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Append one component. Returns `false` when skipped as a duplicate.
    pub fn push(&mut self, item: Expr) -> bool {
        if !self.allow_duplicates && self.items.contains(&item) {
            return false;
        }
        // Never retracted by `remove`
        self.params.extend(item.parameters());
        self.items.push(item);
        true
    }

    /// Append present items in order, skipping `None` and rejected duplicates.
    ///
    /// Returns the number of accepted items.
    pub fn add<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = Option<Expr>>,
    {
        items
            .into_iter()
            .flatten()
            .map(|item| self.push(item))
            .filter(|accepted| *accepted)
            .count()
    }

    /// Remove the first component equal to `item`. Parameters are kept.
    pub fn remove(&mut self, item: &Expr) -> bool {
        match self.items.iter().position(|e| e == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every component and every collected parameter.
    pub fn clear(&mut self) {
        self.items.clear();
        self.params.clear();
    }

    pub fn contains(&self, item: &Expr) -> bool {
        self.items.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.items.iter()
    }

    pub fn parameters(&self) -> &ParamList {
        &self.params
    }

    /// Join component texts with `, `.
    pub(crate) fn join_text(&self) -> String {
        self.join_with(Expr::text)
    }

    /// Join component reference texts (fullname for named objects) with `, `.
    pub(crate) fn join_references(&self) -> String {
        self.join_with(Expr::reference_text)
    }

    fn join_with(&self, render: impl Fn(&Expr) -> &str) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(render(item));
        }
        out
    }
}

impl<'a> IntoIterator for &'a Components {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
