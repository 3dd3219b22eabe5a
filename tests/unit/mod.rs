mod priority_tests;
mod scenario_tests;
