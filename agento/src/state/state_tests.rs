//! Comprehensive tests for the state module.

#[cfg(test)]
mod tests {
    use crate::core::{LogPair, ModuleId, ModuleOutput, ModuleStatus};
    use crate::errors::AgentoError;
    use crate::state::{PipelineState, StateUpdate};
    use crate::testing::sample_criteria_output;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_statuses_default_to_not_started() {
        let state = PipelineState::new();
        for module in ModuleId::ALL {
            assert_eq!(state.get_status(module), ModuleStatus::NotStarted);
        }
        assert_eq!(state.completed_count(), 0);
    }

    #[test]
    fn test_save_output_completes_module() {
        for module in ModuleId::ALL {
            let mut state = PipelineState::new();
            let output = ModuleOutput::new().with("module", json!(module.as_str()));

            state.save_output(module, output.clone());

            assert_eq!(state.get_status(module), ModuleStatus::Completed);
            assert_eq!(state.get_output(module), Some(&output));
        }
    }

    #[test]
    fn test_save_output_overwrites() {
        let mut state = PipelineState::new();
        state.save_output(ModuleId::Module2, ModuleOutput::new().with("v", json!(1)));
        state.save_output(ModuleId::Module2, ModuleOutput::new().with("v", json!(2)));

        assert_eq!(state.get_output(ModuleId::Module2).unwrap().get("v"), Some(&json!(2)));
    }

    #[test]
    fn test_save_output_after_failure_completes() {
        let mut state = PipelineState::new();
        state.set_status(ModuleId::Module4, ModuleStatus::Failed);
        state.save_output(ModuleId::Module4, ModuleOutput::new());

        assert_eq!(state.get_status(ModuleId::Module4), ModuleStatus::Completed);
    }

    #[test]
    fn test_get_output_absent() {
        let state = PipelineState::new();
        assert!(state.get_output(ModuleId::Module3).is_none());
    }

    #[test]
    fn test_set_status_str_ignores_unknown_values() {
        let mut state = PipelineState::new();
        state.set_status(ModuleId::Module2, ModuleStatus::InProgress);

        assert!(!state.set_status_str(ModuleId::Module2, "bogus"));
        assert_eq!(state.get_status(ModuleId::Module2), ModuleStatus::InProgress);

        assert!(!state.set_status_str(ModuleId::Module5, "COMPLETED"));
        assert_eq!(state.get_status(ModuleId::Module5), ModuleStatus::NotStarted);
    }

    #[test]
    fn test_set_status_str_accepts_known_values() {
        let mut state = PipelineState::new();
        for status in ModuleStatus::ALL {
            assert!(state.set_status_str(ModuleId::Module1, status.as_str()));
            assert_eq!(state.get_status(ModuleId::Module1), status);
        }
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            PipelineState::parse_status(ModuleId::Module1, "failed"),
            Some(ModuleStatus::Failed)
        );
        assert_eq!(PipelineState::parse_status(ModuleId::Module1, "done"), None);
        assert_eq!(PipelineState::parse_status(ModuleId::Module1, ""), None);
    }

    #[test]
    fn test_set_status_does_not_touch_output() {
        let mut state = PipelineState::new();
        state.save_output(ModuleId::Module1, ModuleOutput::new());
        state.set_status(ModuleId::Module1, ModuleStatus::InProgress);

        assert!(state.get_output(ModuleId::Module1).is_some());
        assert_eq!(state.get_status(ModuleId::Module1), ModuleStatus::InProgress);
    }

    #[test]
    fn test_logs_round_trip_and_default() {
        let mut state = PipelineState::new();
        assert_eq!(state.get_logs(ModuleId::Module6), LogPair::new("", ""));

        state.save_logs(ModuleId::Module6, "short", "long");
        assert_eq!(state.get_logs(ModuleId::Module6), LogPair::new("short", "long"));

        state.save_logs(ModuleId::Module6, "again", "");
        assert_eq!(state.get_logs(ModuleId::Module6), LogPair::new("again", ""));
        assert!(state.get_logs(ModuleId::Module5).is_empty());
    }

    #[test]
    fn test_previous_output_of_first_module_is_none() {
        let mut state = PipelineState::new();
        for module in ModuleId::ALL {
            state.save_output(module, ModuleOutput::new());
        }
        assert!(state.previous_output(ModuleId::Module1).is_none());
    }

    #[test]
    fn test_previous_output_tracks_predecessor() {
        let mut state = PipelineState::new();
        for module in &ModuleId::ALL[1..] {
            assert!(state.previous_output(*module).is_none());
        }

        for (i, module) in ModuleId::ALL.iter().enumerate() {
            state.save_output(*module, ModuleOutput::new().with("index", json!(i)));
        }

        for window in ModuleId::ALL.windows(2) {
            assert_eq!(
                state.previous_output(window[1]),
                state.get_output(window[0]),
            );
        }
    }

    #[test]
    fn test_previous_output_ignores_predecessor_status() {
        let mut state = PipelineState::new();
        state.save_output(ModuleId::Module2, ModuleOutput::new().with("x", json!(true)));
        state.set_status(ModuleId::Module2, ModuleStatus::Failed);

        assert!(state.previous_output(ModuleId::Module3).is_some());
    }

    #[test]
    fn test_previous_output_by_name() {
        let mut state = PipelineState::new();
        state.save_output(ModuleId::Module1, ModuleOutput::new().with("a", json!(1)));

        assert!(state.previous_output_by_name("module1").unwrap().is_none());
        assert_eq!(
            state.previous_output_by_name("module2").unwrap(),
            state.get_output(ModuleId::Module1)
        );
        assert!(matches!(
            state.previous_output_by_name("module7"),
            Err(AgentoError::UnknownModule(name)) if name == "module7"
        ));
    }

    #[test]
    fn test_criteria_scenario() {
        let mut state = PipelineState::new();
        let output = sample_criteria_output();

        state.save_output(ModuleId::Module1, output.clone());

        assert_eq!(state.get_status(ModuleId::Module1), ModuleStatus::Completed);
        assert_eq!(state.previous_output(ModuleId::Module2), Some(&output));
        assert_eq!(
            state.previous_output(ModuleId::Module2).unwrap().clone().into_value(),
            json!({
                "goal": "launch product",
                "success_criteria": [
                    "Criterion 1", "Criterion 2", "Criterion 3", "Criterion 4", "Criterion 5"
                ],
                "selected_criteria": ["Criterion 1", "Criterion 2"],
            })
        );
    }

    #[test]
    fn test_apply_output_saved_is_single_transition() {
        let mut state = PipelineState::new();
        let before = state.clone();

        state.apply(StateUpdate::OutputSaved {
            module: ModuleId::Module3,
            output: ModuleOutput::new(),
        });

        assert_ne!(state, before);
        assert_eq!(state.get_status(ModuleId::Module3), ModuleStatus::Completed);
        assert!(state.get_output(ModuleId::Module3).is_some());
    }

    #[test]
    fn test_completed_count() {
        let mut state = PipelineState::new();
        state.save_output(ModuleId::Module1, ModuleOutput::new());
        state.save_output(ModuleId::Module2, ModuleOutput::new());
        state.set_status(ModuleId::Module3, ModuleStatus::Failed);

        assert_eq!(state.completed_count(), 2);

        let statuses: Vec<_> = state.statuses().collect();
        assert_eq!(statuses.len(), 6);
        assert_eq!(statuses[2], (ModuleId::Module3, ModuleStatus::Failed));
    }
}
