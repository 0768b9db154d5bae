//! Tests for batch progress tracking

#[cfg(test)]
mod tests {
    use seamtile::io::progress::ProgressManager;
    use std::path::Path;

    // Tests completion counts advance once per file
    // Verified by incrementing twice per call
    #[test]
    fn test_completion_counts() {
        let mut manager = ProgressManager::new();
        assert_eq!(manager.total(), 0);

        manager.initialize(3);
        assert_eq!(manager.total(), 3);

        manager.start_file(Path::new("textures/brick.png"));
        manager.complete_file();
        manager.start_file(Path::new("textures/grass.jpg"));
        manager.complete_file();
        assert_eq!(manager.completed(), 2);

        manager.finish();
    }

    // Tests re-initializing resets the count
    // Verified by keeping the previous count
    #[test]
    fn test_reinitialize_resets() {
        let mut manager = ProgressManager::default();
        manager.initialize(1);
        manager.complete_file();
        manager.initialize(5);
        assert_eq!(manager.completed(), 0);
        assert_eq!(manager.total(), 5);
    }

    // Tests a failed batch leaves the bar stopped rather than running
    // Verified by skipping the abandon call
    #[test]
    fn test_abandon_stops_bar() {
        let mut manager = ProgressManager::new();
        manager.abandon();
        assert!(!manager.is_finished());

        manager.initialize(4);
        manager.complete_file();
        assert!(!manager.is_finished());

        manager.abandon();
        assert!(manager.is_finished());
        assert_eq!(manager.completed(), 1);
    }

    // Tests calls before initialization are harmless
    // Verified by unwrapping the missing bar
    #[test]
    fn test_uninitialized_calls() {
        let mut manager = ProgressManager::new();
        manager.start_file(Path::new("a.png"));
        manager.complete_file();
        manager.finish();
        assert_eq!(manager.completed(), 1);
    }
}
