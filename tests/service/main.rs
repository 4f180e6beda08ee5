//! Service integration tests.


mod dashboard;
