use basket_shared::Quantity;

/// Cumulative quantity ever added per item name.
///
/// Names are stored lowercased, in the order they were first recorded.
/// Counts only grow: removing items from a list does not touch history.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<(String, Quantity)>,
}

impl History {
    pub fn record(&mut self, name: &str, qty: Quantity) {
        let key = name.to_lowercase();

        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, count)) => *count = count.saturating_add(qty),
            None => self.entries.push((key, qty)),
        }
    }

    pub fn count(&self, name: &str) -> Quantity {
        let key = name.to_lowercase();

        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, count)| *count)
            .unwrap_or_default()
    }

    /// The `n` most added names, highest count first. Ties keep
    /// first-recorded order.
    pub fn top(&self, n: usize) -> Vec<String> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.cmp(a));

        ranked
            .into_iter()
            .take(n)
            .map(|(name, _)| name.to_owned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
