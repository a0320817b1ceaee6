use super::*;

const SAMPLE_CSV: &str = "\
,country,description,designation,points,price,province,region_1,region_2,taster_name,taster_twitter_handle,title,variety,winery
0,Italy,\"Aromas include tropical fruit, broom and brimstone.\",Vulkà Bianco,87,,Sicily & Sardinia,Etna,,Kerin O'Keefe,@kerinokeefe,Nicosia 2013 Vulkà Bianco,White Blend,Nicosia
1,Portugal,\"This is ripe and fruity, a wine that is smooth.\",Avidagos,87,15.0,Douro,,,Roger Voss,@vossroger,Quinta dos Avidagos 2011 Avidagos Red,Portuguese Red,Quinta dos Avidagos
2,US,Tart and snappy with crisp acidity.,,87,14.0,Oregon,Willamette Valley,Willamette Valley,Paul Gregutt,@paulgwine,Rainstorm 2013 Pinot Gris,Pinot Gris,Rainstorm
3,,Dusty and dry with a hint of cherry.,,85,,,,,,,Mystery 2010 Red,White Blend,Mystery Cellars
";

fn sample_set() -> ReviewSet {
    ReviewSet::from_reader(SAMPLE_CSV.as_bytes()).unwrap()
}

#[test]
fn loads_rows_and_ignores_the_index_column() {
    let set = sample_set();
    assert_eq!(set.len(), 4);
    let first = set.get(0).unwrap();
    assert_eq!(first.country.as_deref(), Some("Italy"));
    assert_eq!(first.points, 87);
    assert_eq!(first.winery, "Nicosia");
}

#[test]
fn quoted_fields_keep_embedded_commas() {
    let set = sample_set();
    assert_eq!(
        set.get(0).unwrap().description,
        "Aromas include tropical fruit, broom and brimstone."
    );
}

#[test]
fn empty_fields_deserialize_to_none() {
    let set = sample_set();
    assert_eq!(set.get(0).unwrap().price, None);
    assert_eq!(set.get(1).unwrap().price, Some(15.0));
    assert_eq!(set.get(3).unwrap().country, None);
}

#[test]
fn unique_queries_keep_first_appearance_order() {
    let set = sample_set();
    assert_eq!(set.unique_countries(), ["Italy", "Portugal", "US"]);
    assert_eq!(
        set.unique_varieties(),
        ["White Blend", "Portuguese Red", "Pinot Gris"]
    );
}

#[test]
fn joined_descriptions_use_single_spaces_in_load_order() {
    let set = sample_set();
    let joined = set.joined_descriptions();
    assert!(joined.starts_with("Aromas include tropical fruit"));
    assert!(joined.contains(". This is ripe and fruity"));
    assert!(joined.ends_with("a hint of cherry."));
}

#[test]
fn malformed_rows_report_the_row_number() {
    let bad = "\
,country,description,designation,points,price,province,region_1,region_2,taster_name,taster_twitter_handle,title,variety,winery
0,Italy,Fine.,,not-a-number,,,,,,,T,V,W
";
    let err = ReviewSet::from_reader(bad.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("row 1"));
}

#[test]
fn empty_file_with_header_loads_an_empty_set() {
    let header = ",country,description,designation,points,price,province,region_1,region_2,taster_name,taster_twitter_handle,title,variety,winery\n";
    let set = ReviewSet::from_reader(header.as_bytes()).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.joined_descriptions(), "");
}
