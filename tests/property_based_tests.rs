mod common;

use bot_services::{BotServices, NullTelemetrySink, Recognizer, RecognizerMap};
use common::strategies::*;
use common::CannedRecognizer;
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    /// Property: every registered recognizer is returned as the same instance
    #[test]
    fn registered_recognizers_keep_identity(names in recognizer_names_strategy()) {
        let originals: Vec<(String, Arc<dyn Recognizer>)> = names
            .iter()
            .map(|name| (name.clone(), Arc::new(CannedRecognizer::default()) as Arc<dyn Recognizer>))
            .collect();
        let map: RecognizerMap = originals.iter().cloned().collect();

        let services = BotServices::new(Some(Arc::new(NullTelemetrySink)), Some(map)).unwrap();

        prop_assert_eq!(services.recognizers().len(), names.len());
        for (name, original) in &originals {
            let found = services.recognizer(name).unwrap();
            prop_assert!(Arc::ptr_eq(found, original));
        }
    }

    /// Property: names that were never registered are reported as not found
    #[test]
    fn unregistered_names_are_not_found(
        names in recognizer_names_strategy(),
        probe in recognizer_name_strategy(),
    ) {
        prop_assume!(!names.contains(&probe));
        let map: RecognizerMap = names
            .iter()
            .map(|name| (name.clone(), Arc::new(CannedRecognizer::default()) as Arc<dyn Recognizer>))
            .collect();

        let services = BotServices::new(Some(Arc::new(NullTelemetrySink)), Some(map)).unwrap();

        prop_assert!(services.recognizer(&probe).unwrap_err().is_not_found());
        prop_assert!(!services.has_recognizer(&probe));
    }

    /// Property: recognizer names come back sorted and complete
    #[test]
    fn recognizer_names_are_sorted(names in recognizer_names_strategy()) {
        let map: RecognizerMap = names
            .iter()
            .map(|name| (name.clone(), Arc::new(CannedRecognizer::default()) as Arc<dyn Recognizer>))
            .collect();
        let services = BotServices::new(Some(Arc::new(NullTelemetrySink)), Some(map)).unwrap();

        let mut expected: Vec<&str> = names.iter().map(String::as_str).collect();
        expected.sort_unstable();
        prop_assert_eq!(services.recognizer_names(), expected);
    }
}
