mod sync_snapshot_tests;
