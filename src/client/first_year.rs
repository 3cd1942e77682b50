//! First year each year-end chart was published.
//!
//! Charts missing from every list start in [`DEFAULT_FIRST_YEAR`].

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstYear {
    Year(i32),
    /// The origin lists the chart but its year-end pages never render.
    NotLoadable,
}

pub const DEFAULT_FIRST_YEAR: i32 = 2006;

const NOT_LOADABLE: &[&str] = &[
    "japan-hot-100",
    "soundtracks",
    "christian-gospel-albums-artists",
    "top-album-sales-artists",
    "top-alternative-albums",
    "top-alternative-album-artists",
    "christian-hot-ac-chr-artists",
    "christian-ac-indicator-artists",
    "classical-crossover-albums-artists",
    "traditional-classical-albums-artists",
    "classical-budget-midline-albums-artists",
];

const FROM_2002: &[&str] = &[
    "top-billboard-200-albums",
    "hot-country-songs",
    "top-country-albums",
    "hot-r-and-and-b-hip-hop-songs",
    "top-r-and-b-hip-hop-albums",
];

const FROM_2008: &[&str] = &[
    "pop-songs",
    "pop-songs-artists",
    "adult-alternative-songs",
    "adult-alternative-songs-artists",
    "hard-rock-albums",
    "hard-rock-albums-artists",
    "canadian-hot-100",
    "candaian-hot-100-artists",
    "top-canadian-albums",
];

const FROM_2009: &[&str] = &[
    "hot-rock-songs",
    "hot-rock-songs-artists",
    "classical-albums",
    "classical-albums-artists",
    "jazz-albums",
    "jazz-albums-artists",
];

const FROM_2010: &[&str] = &[
    "country-digital-songs-artists",
    "country-digital-songs",
    "rock-digital-songs",
    "rock-digital-songs-artists",
    "folk-albums",
    "folk-artists",
    "r-and-b-hip-hop-digital-songs",
    "r-and-b-hip-hop-digital-songs-artists",
    "rap-digital-songs",
    "rap-digital-songs-artists",
    "latin-digital-songs",
    "latin-digital-songs-artists",
    "christian-digital-songs",
    "christian-digital-songs-artists",
    "gospel-digital-songs",
    "gospel-digital-songs-artists",
    "dance-electronic-digital-songs",
    "dance-electronic-digital-songs-artists",
];

const FROM_2011: &[&str] = &[
    "radio-songs-artists",
    "social-50-artists",
    "top-rock-artists",
    "top-latin-artists",
];

const FROM_2012: &[&str] = &["on-demand-songs", "on-demand-songs-artists"];

const FROM_2013: &[&str] = &[
    "streaming-songs",
    "streaming-songs-artists",
    "country-airplay-songs",
    "country-airplay-artists",
    "country-streaming-songs",
    "country-streaming-songs-artists",
    "rock-airplay-songs",
    "rock-airplay-artists",
    "rock-streaming-songs",
    "rock-streaming-songs-artists",
    "r-and-b-hip-hop-airplay-artists",
    "r-and-b-hip-hop-streaming-songs",
    "r-and-b-hip-hop-streaming-songs-artists",
    "hot-r-and-and-b-songs",
    "hot-r-and-and-b-songs-artists",
    "r-and-b-digital-songs",
    "r-and-b-digital-songs-artists",
    "r-and-b-streaming-songs",
    "r-and-b-streaming-songs-artists",
    "r-and-b-albums",
    "r-and-b-albums-artists",
    "hot-rap-songs",
    "hot-rap-songs-artists",
    "rap-streaming-songs",
    "rap-streaming-songs-artists",
    "latin-airplay-songs",
    "latin-airplay-artists",
    "latin-streaming-songs",
    "latin-streaming-songs-artists",
    "hot-dance-electronic--songs",
    "hot-dance-electronic-songs-artists",
    "dance-electronic-streaming-songs",
    "dance-electronic-streaming-songs-artists",
];

const FROM_2014: &[&str] = &[
    "top-christian-artists",
    "christian-airplay-songs",
    "christian-airplay-artists",
    "christian-streaming-songs",
    "christian-streaming-songs-artists",
    "top-gospel-artists",
    "gospel-airplay-songs",
    "gospel-airplay-artists",
    "gospel-streaming-songs",
    "gospel-streaming-songs-artists",
    "dance-electronic-albums-artists",
    "twitter-top-tracks",
];

const BY_YEAR: &[(i32, &[&str])] = &[
    (2002, FROM_2002),
    (2008, FROM_2008),
    (2009, FROM_2009),
    (2010, FROM_2010),
    (2011, FROM_2011),
    (2012, FROM_2012),
    (2013, FROM_2013),
    (2014, FROM_2014),
];

pub fn first_year(name: &str) -> FirstYear {
    if NOT_LOADABLE.contains(&name) {
        return FirstYear::NotLoadable;
    }
    BY_YEAR
        .iter()
        .find(|(_, names)| names.contains(&name))
        .map(|(year, _)| FirstYear::Year(*year))
        .unwrap_or(FirstYear::Year(DEFAULT_FIRST_YEAR))
}
