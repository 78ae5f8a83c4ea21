/// Ordered wishes. Identity is positional; duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WishList {
    items: Vec<String>,
}

impl WishList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, wish: String) {
        self.items.push(wish);
    }

    /// Remove the wish at `index`, shifting later wishes down. Returns `None`
    /// and leaves the list untouched when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for WishList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}
