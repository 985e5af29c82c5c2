#[cfg(test)]
mod test {
    use crate::{ingest::ingest, prelude::*, tests::toolkit::*, view};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::io::Cursor;

    fn random_records(seed: u64, lines: usize) -> (Vec<String>, Vec<Record>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let content = random_survey(&mut rng, lines);
        let ingested = ingest(Cursor::new(content.join("\n"))).unwrap();
        assert_eq!(ingested.stats.lines, lines);
        (content, ingested.records)
    }

    #[test]
    fn accepted_records() {
        let (content, records) = random_records(1, 1000);
        assert!(!records.is_empty());
        for record in records.iter() {
            let (lat, lon) = record.coordinates().unwrap();
            assert!(lat.is_finite() && lon.is_finite());
            assert!(LATVIAN_CITIES.iter().any(|c| c.name == record.nearest_city()));
            assert_eq!(record.fields().len(), 13);
        }
        // order preserving: accepted lines are a subsequence of the input
        let mut lines = content.iter();
        for record in records.iter() {
            let prefix = record.fields()[..12].join(",");
            assert!(
                lines.any(|line| *line == prefix),
                "record \"{}\" out of order",
                prefix
            );
        }
    }

    #[test]
    fn filter_all_is_identity() {
        let (_, records) = random_records(2, 500);
        assert_eq!(
            view::filter(&records, Technology::All, ""),
            (0..records.len()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let (_, records) = random_records(3, 500);
        for tech in Technology::ALL_CHOICES {
            for lac in ["", "100", "101", "103", "999"] {
                let once = view::filter(&records, tech, lac);
                let subset = once.iter().map(|i| records[*i].clone()).collect::<Vec<_>>();
                let twice = view::filter(&subset, tech, lac);
                assert_eq!(twice, (0..subset.len()).collect::<Vec<_>>());
                assert!(once.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn sort_properties() {
        let (_, records) = random_records(4, 800);
        let mut rng = StdRng::seed_from_u64(5);
        let mut indices = (0..records.len())
            .filter(|_| rng.gen_bool(0.7))
            .collect::<Vec<_>>();
        let input = indices.clone();

        view::sort_by_signal(&records, &mut indices);

        // permutation of the input
        let mut sorted_input = input.clone();
        sorted_input.sort();
        let mut sorted_output = indices.clone();
        sorted_output.sort();
        assert_eq!(sorted_input, sorted_output);

        // numerical rows ascending, ties in input order
        let numeric = indices
            .iter()
            .filter_map(|i| records[*i].signal_dbm().map(|s| (s, *i)))
            .collect::<Vec<_>>();
        for pair in numeric.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1);
            }
        }

        // non numerical rows did not move
        for (slot, index) in input.iter().enumerate() {
            if records[*index].signal_dbm().is_none() {
                assert_eq!(indices[slot], *index);
            }
        }
    }
}
