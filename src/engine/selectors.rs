//! Selector registry: where each field lives in each page layout.
//!
//! Pure data. When the origin moves a field, update the entry here and add a
//! fixture for the new markup; the parsers consume these tables uniformly.

/// Whether a missing element is a broken page or an absent-by-design field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// A text field located by CSS selector, relative to a fragment.
#[derive(Debug, Clone, Copy)]
pub struct TextField {
    pub field: &'static str,
    pub selector: &'static str,
    pub presence: Presence,
}

/// A numeric statistic: `(selector, sentinel, default)` plus presence.
///
/// A located cell whose text is empty or equals `sentinel` yields `default`.
#[derive(Debug, Clone, Copy)]
pub struct StatField {
    pub field: &'static str,
    pub selector: &'static str,
    pub sentinel: &'static str,
    pub default: Option<u32>,
    pub presence: Presence,
}

/// An image element and the attributes to try, lazy-load attribute first.
#[derive(Debug, Clone, Copy)]
pub struct ImageField {
    pub selector: &'static str,
    pub attrs: &'static [&'static str],
}

/// Sentinel the origin prints in empty stat cells.
pub const DASH: &str = "-";

/// Page-wide fallback for the chart title.
pub const OG_TITLE: &str = r#"meta[property="og:title"]"#;

// ── Legacy: single container of attribute-tagged items ───────────────────────

pub struct LegacySelectors {
    /// Presence of this element marks a page as legacy.
    pub marker: &'static str,
    pub entry: &'static str,
    pub rank_attr: &'static str,
    pub title_attr: &'static str,
    pub artist_attr: &'static str,
    pub image: ImageField,
    pub peak: StatField,
    pub last: StatField,
    pub weeks: StatField,
    pub chart_title: &'static str,
    pub chart_title_img: &'static str,
    pub date_button: &'static str,
    pub prev_icon: &'static str,
    pub next_icon: &'static str,
}

pub const LEGACY: LegacySelectors = LegacySelectors {
    marker: "div.chart-list",
    entry: "div.chart-list-item",
    rank_attr: "data-rank",
    title_attr: "data-title",
    artist_attr: "data-artist",
    image: ImageField {
        selector: "img.chart-list-item__image",
        attrs: &["data-src", "src"],
    },
    peak: StatField {
        field: "peak",
        selector: "div.chart-list-item__peak",
        sentinel: DASH,
        default: Some(0),
        presence: Presence::Optional,
    },
    last: StatField {
        field: "last",
        selector: "div.chart-list-item__last-week",
        sentinel: DASH,
        default: Some(0),
        presence: Presence::Required,
    },
    weeks: StatField {
        field: "weeks",
        selector: "div.chart-list-item__weeks-on-chart",
        sentinel: DASH,
        default: Some(1),
        presence: Presence::Required,
    },
    chart_title: "h1.chart-detail-header__chart-name",
    chart_title_img: "img",
    date_button: "button.chart-detail-header__date-selector-button",
    prev_icon: "span.fa-chevron-left",
    next_icon: "span.fa-chevron-right",
};

// ── Modern: list rows with positional cells and labelled meta spans ──────────

pub struct ModernSelectors {
    pub header: &'static str,
    /// Class fragment identifying the optional award column in the header.
    pub award_keyword: &'static str,
    pub row: &'static str,
    /// Cell positions before any award-column shift.
    pub rank_col: usize,
    pub info_col: usize,
    pub title: TextField,
    pub artist: TextField,
    pub peak: StatField,
    pub last: StatField,
    pub weeks: StatField,
    pub chart_title: &'static str,
    pub date_picker: &'static str,
    pub date_attr: &'static str,
    pub prev_attr: &'static str,
    pub next_attr: &'static str,
    pub images_payload: &'static str,
}

pub const MODERN: ModernSelectors = ModernSelectors {
    header: "ul.o-chart-results-list-header",
    award_keyword: "award",
    row: "ul.o-chart-results-list-row",
    rank_col: 0,
    info_col: 1,
    title: TextField {
        field: "title",
        selector: "h3.c-title",
        presence: Presence::Required,
    },
    artist: TextField {
        field: "artist",
        selector: "span.c-label.a-artist",
        presence: Presence::Optional,
    },
    peak: StatField {
        field: "peak",
        selector: "span.chart-meta--peak",
        sentinel: DASH,
        default: None,
        presence: Presence::Required,
    },
    last: StatField {
        field: "last",
        selector: "span.chart-meta--last",
        sentinel: DASH,
        default: Some(0),
        presence: Presence::Required,
    },
    weeks: StatField {
        field: "weeks",
        selector: "span.chart-meta--week",
        sentinel: DASH,
        default: Some(1),
        presence: Presence::Required,
    },
    chart_title: "h1#chart-title",
    date_picker: "#chart-date-picker",
    date_attr: "data-date",
    prev_attr: "data-previous-date",
    next_attr: "data-next-date",
    images_payload: r#"script#chart-images[type="application/json"]"#,
};

// ── Year-end: one article per item, year navigation dropdown ─────────────────

pub struct YearEndSelectors {
    pub entry: &'static str,
    pub rank: TextField,
    pub title: TextField,
    pub artist: TextField,
    pub image: ImageField,
    pub chart_title: &'static str,
    pub year_option: &'static str,
    pub selected_class: &'static str,
}

pub const YEAR_END: YearEndSelectors = YearEndSelectors {
    entry: "article.ye-chart-item",
    rank: TextField {
        field: "rank",
        selector: "div.ye-chart-item__rank",
        presence: Presence::Required,
    },
    title: TextField {
        field: "title",
        selector: "div.ye-chart-item__title",
        presence: Presence::Optional,
    },
    artist: TextField {
        field: "artist",
        selector: "div.ye-chart-item__artist",
        presence: Presence::Optional,
    },
    image: ImageField {
        selector: "div.ye-chart-item__image img",
        attrs: &["data-src", "src"],
    },
    chart_title: "h1.ye-chart__title",
    year_option: "li.dropdown__year-select-option",
    selected_class: "dropdown__year-select-option--selected",
};

// ── Listing page ──────────────────────────────────────────────────────────────

pub const LISTING_LINK: &str = r#"a[href*="/charts/"]"#;
