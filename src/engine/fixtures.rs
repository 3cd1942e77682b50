//! Trimmed copies of real page shapes, one per layout.

/// Legacy artist-only chart: titles live in `data-title`, `data-artist` is empty.
pub const LEGACY_ARTIST_100: &str = r#"
<html><body>
  <div class="chart-detail-header">
    <h1 class="chart-detail-header__chart-name"><img alt="Artist 100" src="logo.png"></h1>
    <a href="/charts/artist-100/2014-07-19"><span class="fa fa-chevron-left"></span></a>
    <button class="chart-detail-header__date-selector-button">July 26, 2014</button>
    <a href="/charts/artist-100/2014-08-02"><span class="fa fa-chevron-right"></span></a>
  </div>
  <div class="chart-list container">
    <div class="chart-list-item" data-rank="1" data-title="Ed Sheeran" data-artist="">
      <img class="chart-list-item__image" data-src="https://img.example/ed.jpg">
      <div class="chart-list-item__peak">1</div>
      <div class="chart-list-item__last-week">-</div>
      <div class="chart-list-item__weeks-on-chart">1</div>
    </div>
    <div class="chart-list-item" data-rank="2" data-title="Sam Smith" data-artist="">
      <div class="chart-list-item__peak">-</div>
      <div class="chart-list-item__last-week">2</div>
      <div class="chart-list-item__weeks-on-chart">9</div>
    </div>
  </div>
</body></html>"#;

/// Legacy weekly chart with a re-entry, two debuts and movers both ways.
/// No "next" link: this is the newest issue.
pub const LEGACY_HOT_100: &str = r#"
<html><head><meta property="og:title" content="The Hot 100 | Billboard"></head><body>
  <div class="chart-detail-header">
    <a href="/charts/hot-100/1996-07-27"><span class="fa fa-chevron-left"></span></a>
    <button class="chart-detail-header__date-selector-button">August 3, 1996</button>
    <span class="fa fa-chevron-right"></span>
  </div>
  <div class="chart-list">
    <div class="chart-list-item" data-rank="1" data-title="Macarena (Bayside Boys Mix)" data-artist="Los Del Rio">
      <div class="chart-list-item__peak">1</div>
      <div class="chart-list-item__last-week">1</div>
      <div class="chart-list-item__weeks-on-chart">23</div>
    </div>
    <div class="chart-list-item" data-rank="2" data-title="How Do U Want It" data-artist="2Pac">
      <div class="chart-list-item__peak">-</div>
      <div class="chart-list-item__last-week">-</div>
      <div class="chart-list-item__weeks-on-chart">1</div>
    </div>
    <div class="chart-list-item" data-rank="3" data-title="Twisted" data-artist="Keith Sweat">
      <div class="chart-list-item__peak">2</div>
      <div class="chart-list-item__last-week">2</div>
      <div class="chart-list-item__weeks-on-chart">14</div>
    </div>
    <div class="chart-list-item" data-rank="4" data-title="Give Me One Reason" data-artist="Tracy Chapman">
      <div class="chart-list-item__peak">3</div>
      <div class="chart-list-item__last-week">-</div>
      <div class="chart-list-item__weeks-on-chart">20</div>
    </div>
    <div class="chart-list-item" data-rank="5" data-title="Loungin" data-artist="LL Cool J">
      <div class="chart-list-item__peak">5</div>
      <div class="chart-list-item__last-week">9</div>
      <div class="chart-list-item__weeks-on-chart">4</div>
    </div>
    <div class="chart-list-item" data-rank="6" data-title="Elevators" data-artist="OutKast">
      <div class="chart-list-item__peak">-</div>
      <div class="chart-list-item__last-week">-</div>
      <div class="chart-list-item__weeks-on-chart">-</div>
    </div>
  </div>
</body></html>"#;

/// Modern weekly chart with the award column present.
pub const MODERN_HOT_100: &str = r#"
<html><body>
  <h1 id="chart-title">The Hot 100</h1>
  <div id="chart-date-picker" data-date="2015-11-28"
       data-previous-date="2015-11-21" data-next-date="2015-12-05"></div>
  <script id="chart-images" type="application/json">
    [{"artist": "Adele", "title": "Hello", "url": "https://img.example/hello.jpg"},
     {"artist": "Justin Bieber", "url": "https://img.example/bieber.jpg"}]
  </script>
  <div class="chart-results-list">
    <ul class="o-chart-results-list-header">
      <li>Rank</li><li class="o-chart-results-list__award">Award</li><li>Title</li>
      <li>Last Week</li><li>Peak</li><li>Weeks</li>
    </ul>
    <ul class="o-chart-results-list-row">
      <li><span class="c-label">1</span></li>
      <li><span class="c-label">&#9733;</span></li>
      <li><h3 class="c-title">Hello</h3><span class="c-label a-artist">Adele</span></li>
      <li><span class="chart-meta--last">1</span></li>
      <li><span class="chart-meta--peak">1</span></li>
      <li><span class="chart-meta--week">4</span></li>
    </ul>
    <ul class="o-chart-results-list-row">
      <li><span class="c-label">2</span></li>
      <li></li>
      <li><h3 class="c-title">Sorry</h3><span class="c-label a-artist">Justin Bieber</span></li>
      <li><span class="chart-meta--last">-</span></li>
      <li><span class="chart-meta--peak">-</span></li>
      <li><span class="chart-meta--week">1</span></li>
    </ul>
    <ul class="o-chart-results-list-row">
      <li><span class="c-label">3</span></li>
      <li></li>
      <li><h3 class="c-title">Hotline Bling</h3><span class="c-label a-artist">Drake</span></li>
      <li><span class="chart-meta--last">2</span></li>
      <li><span class="chart-meta--peak">2</span></li>
      <li><span class="chart-meta--week">17</span></li>
    </ul>
  </div>
</body></html>"#;

/// Modern artist-only chart without the award column.
pub const MODERN_ARTIST_100: &str = r#"
<html><body>
  <h1 id="chart-title">Artist 100</h1>
  <div id="chart-date-picker" data-date="2021-06-05" data-previous-date="2021-05-29" data-next-date=""></div>
  <ul class="o-chart-results-list-header"><li>Rank</li><li>Artist</li><li>Last Week</li><li>Peak</li><li>Weeks</li></ul>
  <ul class="o-chart-results-list-row">
    <li><span class="c-label">1</span></li>
    <li><h3 class="c-title">BTS</h3><span class="c-label a-artist"></span></li>
    <li><span class="chart-meta--last">3</span></li>
    <li><span class="chart-meta--peak">1</span></li>
    <li><span class="chart-meta--week">150</span></li>
  </ul>
</body></html>"#;

/// Modern evergreen ("all-time") chart: no date picker, no stats.
pub const MODERN_GREATEST: &str = r#"
<html><head><meta property="og:title" content="Greatest of All Time Hot 100 Singles | Billboard"></head><body>
  <ul class="o-chart-results-list-row">
    <li><span class="c-label">1</span></li>
    <li><h3 class="c-title">The Twist</h3><span class="c-label a-artist">Chubby Checker</span></li>
  </ul>
  <ul class="o-chart-results-list-row">
    <li><span class="c-label">2</span></li>
    <li><h3 class="c-title">Smooth</h3><span class="c-label a-artist">Santana Featuring Rob Thomas</span></li>
  </ul>
</body></html>"#;

/// A dated page published before its rows were filled in.
pub const MODERN_UNPUBLISHED: &str = r#"
<html><body>
  <h1 id="chart-title">The Hot 100</h1>
  <div id="chart-date-picker" data-date="2015-12-05" data-previous-date="2015-11-28"></div>
  <div class="chart-results-list"></div>
</body></html>"#;

/// Year-end chart with a contiguous year dropdown.
pub const YEAR_END_HOT_100: &str = r#"
<html><body>
  <h1 class="ye-chart__title">Hot 100 Songs - Year-End</h1>
  <ul class="dropdown__year-select-options">
    <li class="dropdown__year-select-option">2016</li>
    <li class="dropdown__year-select-option dropdown__year-select-option--selected">2015</li>
    <li class="dropdown__year-select-option">2014</li>
    <li class="dropdown__year-select-option">2013</li>
  </ul>
  <article class="ye-chart-item">
    <div class="ye-chart-item__rank">1</div>
    <div class="ye-chart-item__image"><img data-src="https://img.example/uptown.jpg"></div>
    <div class="ye-chart-item__title">Uptown Funk!</div>
    <div class="ye-chart-item__artist"><a href="/music/mark-ronson">Mark Ronson Featuring Bruno Mars</a></div>
  </article>
  <article class="ye-chart-item">
    <div class="ye-chart-item__rank">2</div>
    <div class="ye-chart-item__title">Thinking Out Loud</div>
    <div class="ye-chart-item__artist">Ed Sheeran</div>
  </article>
</body></html>"#;

/// Year-end artist chart whose dropdown skips 1970.
pub const YEAR_END_GAPPY: &str = r#"
<html><body>
  <h1 class="ye-chart__title">Hot Country Songs - Year-End</h1>
  <ul class="dropdown__year-select-options">
    <li class="dropdown__year-select-option">1972</li>
    <li class="dropdown__year-select-option">1971</li>
    <li class="dropdown__year-select-option">1969</li>
  </ul>
  <article class="ye-chart-item">
    <div class="ye-chart-item__rank">1</div>
    <div class="ye-chart-item__title">Hello Darlin'</div>
    <div class="ye-chart-item__artist">Conway Twitty</div>
  </article>
</body></html>"#;

/// Chart listing page.
pub const LISTING: &str = r#"
<html><body>
  <a href="/charts/hot-100">The Hot 100</a>
  <a href="https://www.billboard.com/charts/billboard-200/">Billboard 200</a>
  <a href="/charts/hot-100">The Hot 100 (again)</a>
  <a href="/charts/artist-100">Artist 100</a>
  <a href="/charts/year-end">Year-End Charts</a>
  <a href="/charts/year-end/2019/hot-100-songs">Hot 100 Songs</a>
  <a href="/charts/year-end/2019/top-artists">Top Artists</a>
  <a href="/music/news">News</a>
</body></html>"#;
