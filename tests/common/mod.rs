#![allow(dead_code)]

use axum::Router;
use gridstats::{DocumentSource, FetchConfig, GridstatsError};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use url::Url;

pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

/// Serves canned pages keyed by URL path and remembers what was asked for.
#[derive(Default)]
pub struct StaticSource {
    pages: HashMap<String, String>,
    pub calls: Mutex<Vec<(String, FetchConfig)>>,
}

impl StaticSource {
    pub fn with_page(mut self, path: &str, html: String) -> Self {
        self.pages.insert(path.to_string(), html);
        self
    }
}

#[async_trait::async_trait]
impl DocumentSource for StaticSource {
    async fn fetch(&self, url: &Url, config: &FetchConfig) -> gridstats::Result<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((url.path().to_string(), config.clone()));
        self.pages
            .get(url.path())
            .map(|html| html.as_bytes().to_vec())
            .ok_or(GridstatsError::UnexpectedStatus(404))
    }
}

pub fn base() -> Url {
    Url::parse("https://www.pro-football-reference.com/").unwrap()
}

/// First cell as `th`, the rest as `td`, the way the site marks up rows.
pub fn tr(cells: &[&str]) -> String {
    let mut html = String::from("<tr>");
    for (i, cell) in cells.iter().enumerate() {
        let tag = if i == 0 { "th" } else { "td" };
        html.push_str(&format!("<{tag}>{cell}</{tag}>"));
    }
    html.push_str("</tr>\n");
    html
}

pub fn table(id: &str, head: &[String], body: &[String]) -> String {
    format!(
        "<table id=\"{}\"><thead>{}</thead><tbody>{}</tbody></table>",
        id,
        head.concat(),
        body.concat()
    )
}

pub fn page(body: &str) -> String {
    format!("<html><head><title>stub</title></head><body>{}</body></html>", body)
}

pub fn team_index_page() -> String {
    page(&table(
        "team_index",
        &[
            tr(&["", "", "", "", "", "", "", "", "Points", "", "", "", "Top Players"]),
            tr(&[
                "Year", "Lg", "Tm", "W", "L", "T", "Div. Finish", "Playoffs", "PF", "PA", "PD",
                "Coaches", "AV", "Passer", "Rusher", "Receiver", "Pts", "Yds", "Pts", "Yds",
                "T/G", "Pts±", "Yds±", "Out of", "MoV", "SoS", "SRS", "OSRS", "DSRS",
            ]),
        ],
        &[
            tr(&[
                "1981", "NFL", "Green Bay Packers", "8", "8", "0", "2nd of 5", "", "324", "361",
                "-37", "Bart Starr (8-8)", "James Lofton", "Lynn Dickey", "Gerry Ellis",
                "James Lofton", "13", "8", "18", "22", "5", "17", "16", "28", "-2.3", "-0.6",
                "-2.9", "0.6", "-3.5",
            ]),
            tr(&[
                "1980", "NFL", "Green Bay Packers", "5", "10", "1", "4th of 5", "", "231", "371",
                "-140", "Bart Starr (5-10-1)", "James Lofton", "Lynn Dickey", "Eddie Lee Ivery",
                "James Lofton", "27", "9", "26", "25", "26", "28", "20", "28", "-8.8", "0.6",
                "-8.2", "-3.3", "-4.9",
            ]),
        ],
    ))
}

pub fn standings_page() -> String {
    let head = [tr(&[
        "Tm", "W", "L", "W-L%", "PF", "PA", "PD", "MoV", "SoS", "SRS", "OSRS", "DSRS",
    ])];
    let afc = table(
        "AFC",
        &head,
        &[
            "<tr class=\"thead onecell\"><td colspan=\"12\">AFC East</td></tr>".to_string(),
            tr(&["New England Patriots*", "12", "4", ".750", "420", "225", "195", "12.2", "-1.7", "10.5", "0.3", "10.2"]),
            tr(&["Buffalo Bills+", "10", "6", ".625", "314", "259", "55", "3.4", "-1.5", "1.9", "-4.0", "5.9"]),
            "<tr class=\"thead onecell\"><td colspan=\"12\">AFC North</td></tr>".to_string(),
            tr(&["Baltimore Ravens*", "14", "2", ".875", "531", "282", "249", "15.6", "-0.6", "15.0", "11.8", "3.2"]),
        ],
    );
    let nfc = table(
        "NFC",
        &head,
        &[
            "<tr class=\"thead onecell\"><td colspan=\"12\">NFC North</td></tr>".to_string(),
            tr(&["Green Bay Packers*", "13", "3", ".813", "376", "313", "63", "3.9", "-0.7", "3.2", "0.6", "2.6"]),
            tr(&["Detroit Lions", "3", "12", ".219", "341", "423", "-82", "-5.1", "0.2", "-4.9", "-0.1", "-4.8"]),
        ],
    );
    page(&format!("<div id=\"all_standings\">{}{}</div>", afc, nfc))
}

pub fn team_stats_page() -> String {
    let head = [
        tr(&["", "", "Tot Yds & TO", "", "", "", "Passing"]),
        tr(&[
            "Player", "PF", "Yds", "Ply", "Y/P", "TO", "FL", "1stD", "Cmp", "Att", "Yds", "TD",
            "Int", "NY/A", "1stD", "Att", "Yds", "TD", "Y/A", "1stD", "Pen", "Yds", "1stPy", "#Dr",
            "Sc%", "TO%", "Start", "Time", "Plays", "Yds", "Pts",
        ]),
    ];
    page(&table(
        "team_stats",
        &head,
        &[
            tr(&[
                "Team Stats", "376", "5528", "1013", "5.5", "17", "6", "315", "339", "565",
                "3733", "26", "4", "6.2", "180", "411", "1795", "16", "4.4", "109", "87", "758",
                "26", "176", "42.0", "9.7", "Own 29.1", "2.15", "5.8", "31.1", "2.03",
            ]),
            tr(&[
                "Opp. Stats", "313", "5880", "1020", "5.8", "25", "7", "320", "340", "539",
                "3658", "21", "12", "6.3", "190", "445", "2127", "11", "4.8", "102", "", "803",
                "28", "179", "33.5", "14.0", "Own 27.4", "2.40", "5.7", "31.9", "1.62",
            ]),
            tr(&[
                "Lg Rank Offense", "15", "18", "", "17", "4", "", "", "", "", "17", "", "", "14",
                "", "", "15", "", "", "", "", "", "", "", "14", "", "", "", "", "", "",
            ]),
            tr(&[
                "Lg Rank Defense", "9", "18", "", "19", "8", "", "", "", "", "14", "", "", "11",
                "", "", "23", "", "", "", "", "", "", "", "8", "", "", "", "", "", "",
            ]),
        ],
    ))
}

pub fn draft_page() -> String {
    let head = [tr(&[
        "Year", "Rnd", "Player", "Pick", "Pos", "To", "AP1", "PB", "St", "CarAV", "G", "Cmp",
        "Att", "Yds", "TD", "Int", "Att", "Yds", "TD", "Rec", "Yds", "TD", "Int", "Sk", "College/Univ",
    ])];
    page(&table(
        "draft",
        &head,
        &[
            tr(&[
                "2006", "1", "A.J. Hawk", "5", "LB", "2014", "0", "0", "8", "65", "143", "", "", "",
                "", "", "", "", "", "", "", "", "9", "19.5", "Ohio St.",
            ]),
            tr(&[
                "2005", "1", "Aaron Rodgers", "24", "QB", "2022", "4", "10", "15", "189", "230",
                "4741", "7260", "59055", "475", "105", "687", "3423", "35", "", "", "", "", "",
                "California",
            ]),
            tr(&[
                "2005", "2", "Nick Collins", "51", "DB", "2011", "0", "3", "7", "48", "95", "", "", "",
                "", "", "", "", "", "", "", "", "21", "1.0", "Bethune-Cookman",
            ]),
            tr(&["2005", "7"]),
        ],
    ))
}

pub fn season_page() -> String {
    let playoffs = table(
        "playoff_results",
        &[tr(&["Week", "Day", "Date", "Winner/tie", "Loser/tie", "", "PtsW", "PtsL"])],
        &[
            tr(&["WildCard", "Sat", "January 4", "Houston Texans", "Buffalo Bills", "boxscore", "22", "19"]),
            tr(&["Division", "Sun", "January 12", "Kansas City Chiefs", "Houston Texans", "boxscore", "51", "31"]),
            tr(&["SuperBowl", "Sun", "February 2", "Kansas City Chiefs", "San Francisco 49ers", "boxscore", "31", "20"]),
        ],
    );
    let awards = r#"<div id="all_awards" class="table_wrapper">
<div class="section_heading"><h2>Awards</h2></div>
<div class="placeholder"></div>
<!--
<div class="table_container" id="div_awards">
  <div><strong>AP MVP:</strong> <a href="/players/J/JackLa00.htm">Lamar Jackson</a></div>
  <div><strong>AP Offensive Rookie of the Year:</strong> <a href="/players/M/MurrKy00.htm">Kyler Murray</a></div>
  <div><strong>AP Coach of the Year:</strong></div>
</div>
-->
</div>"#;
    page(&format!("{}{}{}", standings_page(), playoffs, awards))
}
