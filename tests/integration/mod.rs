// Integration tests for API endpoints
// Request validation runs against a lazy pool; record operations need a live database
