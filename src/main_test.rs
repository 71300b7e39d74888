#[cfg(test)]
mod tests {
    use crate::{dump_lines, read_collection};
    use geo_distmatrix::Collection;
    use std::fs;
    use std::path::PathBuf;

    fn write_csv(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).expect("Failed to create test CSV");
        path
    }

    #[test]
    fn test_read_collection() {
        let test_csv = "id,latitude,longitude
nyc,40.7128,-74.0060
la,34.0522,-118.2437
short,1.0
bad,north,west
sf, 37.7749 , -122.4194";

        let test_file = write_csv("geo_distmatrix_read.csv", test_csv);
        let mut collection = read_collection(&test_file, "us").expect("Failed to read CSV");
        fs::remove_file(&test_file).ok();

        assert_eq!(collection.id(), "us");
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.position("sf"), Some(2));
        assert!(!collection.contains("bad"));

        let d = collection.distance("nyc", "la").unwrap();
        assert!((d - 3_936_000).abs() <= 5_000);
        let (min, max) = collection.min_max().unwrap();
        assert!(min > 0 && min < max);
        // nyc-sf is the longest leg
        assert!(max > d);
    }

    #[test]
    fn test_read_collection_without_header() {
        let test_file = write_csv("geo_distmatrix_noheader.csv", "a,0,0\nb,0,1\n");
        let collection = read_collection(&test_file, "eq").expect("Failed to read CSV");
        fs::remove_file(&test_file).ok();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.position("a"), Some(0));
    }

    #[test]
    fn test_read_collection_duplicate_id() {
        let test_file = write_csv("geo_distmatrix_dup.csv", "a,0,0\na,0,1\n");
        let result = read_collection(&test_file, "dup");
        fs::remove_file(&test_file).ok();

        let err = result.expect_err("duplicate id should fail");
        assert!(err.to_string().contains("`a`"));
    }

    #[test]
    fn test_dump_lines() {
        let mut collection = Collection::new("eq");
        collection.add("a", 0.0, 0.0).unwrap();
        collection.add("b", 0.0, 1.0).unwrap();

        let lines = dump_lines(&mut collection);
        assert_eq!(
            lines,
            vec![
                "Collection: eq",
                "< 0 > a: Lat: 0.000000, Long: 0.000000",
                "< 1 > b: Lat: 0.000000, Long: 1.000000",
                "0: [0, 111318]",
                "1: [0]",
            ]
        );
    }
}
