use serde::{Deserialize, Serialize, Serializer};

use crate::error::PagyError;

/// Pages shown at the start, before the current page, after it, and at the end.
pub type Size = [u64; 4];

pub const DEFAULT_SIZE: Size = [1, 4, 4, 1];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Overflow {
    #[default]
    #[serde(rename = "exception")]
    Exception,
    #[serde(rename = "last_page")]
    LastPage,
    #[serde(rename = "empty_page")]
    EmptyPage,
}

impl Overflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exception => "exception",
            Self::LastPage => "last_page",
            Self::EmptyPage => "empty_page",
        }
    }
}

impl std::str::FromStr for Overflow {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exception" => Ok(Self::Exception),
            "last_page" => Ok(Self::LastPage),
            "empty_page" => Ok(Self::EmptyPage),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Series size used from a minimum viewport width upwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Step {
    pub width: u32,
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Vars {
    pub items: u64,
    pub outset: u64,
    pub size: Size,
    pub steps: Option<Vec<Step>>,
    pub page_param: String,
    pub params: Vec<(String, String)>,
    pub fragment: String,
    pub link_extra: String,
    pub cycle: bool,
    pub overflow: Overflow,
    pub trim: bool,
}

impl Default for Vars {
    fn default() -> Self {
        Self {
            items: 20,
            outset: 0,
            size: DEFAULT_SIZE,
            steps: None,
            page_param: "page".to_string(),
            params: Vec::new(),
            fragment: String::new(),
            link_extra: String::new(),
            cycle: false,
            overflow: Overflow::Exception,
            trim: false,
        }
    }
}

/// One marker in a page series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesItem {
    Page(u64),
    Current(u64),
    Gap,
}

// Client script tells the kinds apart by JSON type: number, string, "gap".
impl Serialize for SeriesItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u64(*page),
            Self::Current(page) => serializer.collect_str(page),
            Self::Gap => serializer.serialize_str("gap"),
        }
    }
}

/// Series per minimum viewport width, in step order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sequels(pub Vec<(u32, Vec<SeriesItem>)>);

impl Sequels {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Sequels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(width, series)| (width.to_string(), series)))
    }
}

/// Immutable pagination state for one page of a collection.
#[derive(Clone, Debug)]
pub struct Pagy {
    pub count: u64,
    pub page: u64,
    /// Page asked for, differs from `page` only after a `last_page` overflow.
    pub requested_page: u64,
    pub items: u64,
    pub outset: u64,
    pub pages: u64,
    pub last: u64,
    pub offset: u64,
    pub from: u64,
    pub to: u64,
    pub in_page: u64,
    pub prev: Option<u64>,
    pub next: Option<u64>,
    pub overflow: bool,
    pub vars: Vars,
}

impl Pagy {
    pub fn new(count: u64, page: u64, vars: Vars) -> Result<Self, PagyError> {
        if page < 1 {
            return Err(PagyError::variable("page", ">= 1", page));
        }
        if vars.items < 1 {
            return Err(PagyError::variable("items", ">= 1", vars.items));
        }

        let items = vars.items;
        let last = count.div_ceil(items).max(1);
        let mut pagy = Self {
            count,
            page,
            requested_page: page,
            items,
            outset: vars.outset,
            pages: last,
            last,
            offset: 0,
            from: 0,
            to: 0,
            in_page: 0,
            prev: None,
            next: None,
            overflow: page > last,
            vars,
        };

        if !pagy.overflow {
            pagy.setup_page(page)?;
            return Ok(pagy);
        }

        match pagy.vars.overflow {
            Overflow::Exception => Err(PagyError::Overflow { page, last }),
            Overflow::LastPage => {
                tracing::debug!(page, last, "page overflow, rendering last page");
                pagy.setup_page(last)?;
                Ok(pagy)
            }
            Overflow::EmptyPage => {
                tracing::debug!(page, last, "page overflow, rendering empty page");
                pagy.offset = offset_for(items, page, pagy.outset)?;
                pagy.prev = Some(last);
                Ok(pagy)
            }
        }
    }

    fn setup_page(&mut self, page: u64) -> Result<(), PagyError> {
        self.page = page;
        self.offset = offset_for(self.items, page, self.outset)?;
        let start = self.offset - self.outset;
        self.from = (start + 1).min(self.count);
        self.to = start.saturating_add(self.items).min(self.count);
        self.in_page = (self.to + 1).saturating_sub(self.from).min(self.count);
        self.prev = (page > 1).then(|| page - 1);
        self.next = if page == self.last {
            self.vars.cycle.then_some(1)
        } else {
            Some(page + 1)
        };
        Ok(())
    }

    fn is_empty_overflow(&self) -> bool {
        self.overflow && self.vars.overflow == Overflow::EmptyPage
    }

    /// Page markers to link, e.g. `[1, gap, 7, 8, "9", 10, 11, gap, 36]`.
    ///
    /// An `empty_page` overflow shows the window of the last page with no current marker.
    pub fn series(&self, size: &Size) -> Result<Vec<SeriesItem>, PagyError> {
        if self.is_empty_overflow() {
            return Ok(window(self.last, self.last, size));
        }

        let mut series = window(self.page, self.last, size);
        let current = series
            .iter_mut()
            .find(|item| **item == SeriesItem::Page(self.page))
            .ok_or_else(|| {
                PagyError::Internal(
                    format!("page {} missing from series of {} pages", self.page, self.last).into(),
                )
            })?;
        *current = SeriesItem::Current(self.page);
        Ok(series)
    }

    /// One series per step; without explicit steps a single `0` width step uses `vars.size`.
    pub fn sequels(&self, steps: Option<&[Step]>) -> Result<Sequels, PagyError> {
        let default;
        let steps = match steps.or(self.vars.steps.as_deref()) {
            Some(steps) => steps,
            None => {
                default = [Step {
                    width: 0,
                    size: self.vars.size,
                }];
                &default[..]
            }
        };
        if !steps.iter().any(|step| step.width == 0) {
            let widths: Vec<u32> = steps.iter().map(|step| step.width).collect();
            return Err(PagyError::variable(
                "steps",
                "to define the 0 width",
                format!("{widths:?}"),
            ));
        }

        steps
            .iter()
            .map(|step| Ok((step.width, self.series(&step.size)?)))
            .collect::<Result<Vec<_>, PagyError>>()
            .map(Sequels)
    }

    pub fn label_for(&self, page: u64) -> String {
        page.to_string()
    }
}

/// Offset of the first item of `page`, or a variable error when it does not fit in `u64`.
fn offset_for(items: u64, page: u64, outset: u64) -> Result<u64, PagyError> {
    let start = items.checked_mul(page - 1).ok_or_else(|| {
        PagyError::variable("page", format!("<= {}", (u64::MAX / items).saturating_add(1)), page)
    })?;
    start.checked_add(outset).ok_or_else(|| {
        PagyError::variable("outset", format!("<= {}", u64::MAX - start), outset)
    })
}

/// Pages around `page` with gaps, all unmarked.
fn window(page: u64, last: u64, size: &Size) -> Vec<SeriesItem> {
    let [head, before, after, tail] = size.map(|n| i64::try_from(n).unwrap_or(i64::MAX));
    let page = i64::try_from(page).unwrap_or(i64::MAX);
    let last = i64::try_from(last).unwrap_or(i64::MAX);

    let left_gap_start = head.saturating_add(1);
    let mut left_gap_end = page.saturating_sub(before).saturating_sub(1);
    let mut right_gap_start = page.saturating_add(after).saturating_add(1);
    let right_gap_end = last.saturating_sub(tail);
    if left_gap_end > right_gap_end {
        left_gap_end = right_gap_end;
    }
    if left_gap_start > right_gap_start {
        right_gap_start = left_gap_start;
    }

    let mut series = Vec::new();
    let mut start = 1;
    if left_gap_end.saturating_sub(left_gap_start) > 0 {
        series.extend((start..left_gap_start).map(|n| SeriesItem::Page(n as u64)));
        series.push(SeriesItem::Gap);
        start = left_gap_end + 1;
    }
    if right_gap_end.saturating_sub(right_gap_start) > 0 {
        series.extend((start..right_gap_start).map(|n| SeriesItem::Page(n as u64)));
        series.push(SeriesItem::Gap);
        start = right_gap_end + 1;
    }
    series.extend((start..=last).map(|n| SeriesItem::Page(n as u64)));
    series
}
