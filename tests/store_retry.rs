//! The process-wide store must not cache a failed load; the next call
//! retries the read. Kept in its own test binary so the cache starts empty.

use std::fs;
use std::path::Path;

use medalboard::{data, LoaderError};
use tempfile::TempDir;

fn write_minimal_fixture(dir: &Path) {
    let files: [(&str, &str); 9] = [
        (
            "athletes.csv",
            "name,country_code,gender\nAlice,USA,Female\n",
        ),
        (
            "medals.csv",
            "medal_type,name,gender,discipline,country_code\n\
             Gold Medal,Alice,W,Swimming,USA\n",
        ),
        (
            "medals_total.csv",
            "country_code,Gold Medal,Silver Medal,Bronze Medal\nUSA,1,0,0\n",
        ),
        ("events.csv", "event,sport\n100m freestyle,Swimming\n"),
        ("nocs.csv", "code,country\nUSA,United States\n"),
        ("schedules.csv", "start_date,discipline\n2024-07-27,Swimming\n"),
        ("venues.csv", "venue\nParis La Defense Arena\n"),
        ("coaches.csv", "name,country_code\nCoach K,USA\n"),
        (
            "medallists.csv",
            "medal_type,name,country_code\nGold Medal,Alice,USA\n",
        ),
    ];

    for (name, contents) in files {
        fs::write(dir.join(name), contents).unwrap();
    }
}

#[test]
fn failed_load_caches_nothing_and_the_next_call_retries() {
    let tmp = TempDir::new().unwrap();

    // Nothing to read yet, so the load fails and must not populate the cache.
    let err = data::cached(tmp.path()).unwrap_err();
    assert!(matches!(err, LoaderError::MissingFile { .. }));

    write_minimal_fixture(tmp.path());

    let games = data::cached(tmp.path()).unwrap();
    assert_eq!(games.athletes.height(), 1);
    assert_eq!(games.country_codes(), vec!["USA"]);
}
