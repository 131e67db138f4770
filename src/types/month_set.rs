use log::warn;

/// The set of months (1-12) a request asks for. Duplicates collapse, anything outside
/// 1..=12 is dropped.
///
/// # Examples
///
/// ```
/// use windsolar::MonthSet;
///
/// let months: MonthSet = [3, 1, 3, 14].into_iter().collect();
/// assert_eq!(months.iter().collect::<Vec<_>>(), vec![1, 3]);
///
/// let from_form = MonthSet::parse(["2", " 5", "x"]);
/// assert!(from_form.contains(5));
/// assert_eq!(from_form.len(), 2);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MonthSet {
    bits: u16,
}

impl MonthSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All twelve months.
    pub fn all() -> Self {
        (1..=12).collect()
    }

    /// Builds a set from textual month numbers, skipping values that do not parse.
    pub fn parse<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter_map(|value| {
                let value = value.as_ref();
                match value.trim().parse::<u32>() {
                    Ok(month) => Some(month),
                    Err(_) => {
                        warn!("Ignoring unparseable month '{}'", value);
                        None
                    }
                }
            })
            .collect()
    }

    pub fn insert(&mut self, month: u32) -> bool {
        if !(1..=12).contains(&month) {
            warn!("Ignoring out-of-range month {}", month);
            return false;
        }
        let added = !self.contains(month);
        self.bits |= 1 << month;
        added
    }

    pub fn contains(&self, month: u32) -> bool {
        (1..=12).contains(&month) && self.bits & (1 << month) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Months in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=12).filter(|&m| self.contains(m))
    }
}

impl FromIterator<u32> for MonthSet {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut set = MonthSet::empty();
        for month in iter {
            set.insert(month);
        }
        set
    }
}
