mod bounds_tests;
