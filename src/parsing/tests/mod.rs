use super::table::RawRow;

pub fn row(cells: &[&str]) -> RawRow {
    cells.iter().map(|c| c.to_string()).collect()
}

pub const STANDINGS_PAGE: &str = r#"<html><body>
<div id="standings">
<table id="AFC">
  <thead><tr><th>Tm</th><th>W</th><th>L</th></tr></thead>
  <tbody>
    <tr class="thead onecell"><td colspan="3">AFC East</td></tr>
    <tr><th>New England Patriots*</th><td>12</td><td>4</td></tr>
    <tr><th>Buffalo Bills</th><td>10</td><td>6</td></tr>
    <tr class="thead onecell"><td colspan="3">AFC North</td></tr>
    <tr><th>Baltimore Ravens+</th><td>11</td><td>5</td></tr>
  </tbody>
</table>
<table id="NFC">
  <thead><tr><th>Tm</th><th>W</th><th>L</th></tr></thead>
  <tbody>
    <tr class="thead onecell"><td colspan="3">NFC North</td></tr>
    <tr><th>Green Bay Packers+</th><td>13</td><td>3</td></tr>
  </tbody>
</table>
</div>
</body></html>"#;

pub const HIDDEN_TABLE_PAGE: &str = r#"<html><body>
<div id="all_hidden_stats">
  <div class="section_heading"><h2>Hidden</h2></div>
  <!--
  <table id="hidden_stats">
    <tr><th>Team</th><th>Pts</th></tr>
    <tr><td>GNB</td><td>27</td></tr>
  </table>
  -->
</div>
</body></html>"#;
