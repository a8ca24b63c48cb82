mod math_test;
