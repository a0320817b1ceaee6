use super::*;

use crate::dataset::ReviewSet;

const CSV: &str = "\
,country,description,designation,points,price,province,region_1,region_2,taster_name,taster_twitter_handle,title,variety,winery
0,Italy,A.,,90,,,,,,,T,V,W
1,Italy,B.,,80,,,,,,,T,V,W
2,France,C.,,95,,,,,,,T,V,W
3,,D.,,99,,,,,,,T,V,W
4,Austria,E.,,95,,,,,,,T,V,W
";

fn summaries() -> Vec<CountrySummary> {
    summarize_by_country(&ReviewSet::from_reader(CSV.as_bytes()).unwrap())
}

#[test]
fn groups_aggregate_count_mean_and_max() {
    let rows = summaries();
    assert_eq!(rows.len(), 3);

    let italy = rows.iter().find(|r| r.country == "Italy").unwrap();
    assert_eq!(italy.wines, 2);
    assert_eq!(italy.mean_points, 85.0);
    assert_eq!(italy.max_points, 90);
}

#[test]
fn rows_without_country_are_excluded() {
    let rows = summaries();
    assert!(rows.iter().all(|r| r.max_points <= 95));
}

#[test]
fn default_order_is_country_ascending() {
    let rows = summaries();
    let countries: Vec<&str> = rows.iter().map(|r| r.country.as_str()).collect();
    let mut sorted = countries.clone();
    sorted.sort();
    assert_eq!(countries, sorted);
}

#[test]
fn sort_by_mean_points_descending() {
    let mut rows = summaries();
    sort_summaries(&mut rows, SortBy::MeanPoints, true);
    let means: Vec<f64> = rows.iter().map(|r| r.mean_points).collect();
    assert_eq!(means, [95.0, 95.0, 85.0]);
    // Stable sort: the mean-points tie keeps country-ascending order.
    assert_eq!(rows[0].country, "Austria");
    assert_eq!(rows[1].country, "France");
}

#[test]
fn sort_by_wines_ascending() {
    let mut rows = summaries();
    sort_summaries(&mut rows, SortBy::Wines, false);
    assert_eq!(rows.last().unwrap().country, "Italy");
}

#[test]
fn empty_set_summarizes_to_nothing() {
    let header = ",country,description,designation,points,price,province,region_1,region_2,taster_name,taster_twitter_handle,title,variety,winery\n";
    let set = ReviewSet::from_reader(header.as_bytes()).unwrap();
    assert!(summarize_by_country(&set).is_empty());
}
