//! The shipped sample table, in display order.

pub(crate) struct BuiltinSample {
    pub id: &'static str,
    pub title: &'static str,
    pub source_text: &'static str,
    pub expected_output: &'static str,
}

pub(crate) const BUILTIN_SAMPLES: &[BuiltinSample] = &[
    BuiltinSample {
        id: "test1",
        title: "FOR-DO loop 1..5",
        source_text: "PROGRAM TEST1;
VAR i: INTEGER;
BEGIN
  FOR i := 1 TO 5 DO
  BEGIN
    writeln(i);
  END;
END.",
        expected_output: "1\n2\n3\n4\n5\n",
    },
    BuiltinSample {
        id: "test2",
        title: "WHILE-DO increments",
        source_text: "PROGRAM TEST2;
VAR x: INTEGER;
BEGIN
  x := 1;
  WHILE x < 5 DO
  BEGIN
    writeln(x);
    x := x + 1;
  END;
END.",
        expected_output: "1\n2\n3\n4\n",
    },
    BuiltinSample {
        id: "test3",
        title: "FOR with BREAK/CONTINUE",
        source_text: "PROGRAM TEST3;
VAR i: INTEGER;
BEGIN
  FOR i := 1 TO 10 DO
  BEGIN
    IF i = 3 THEN CONTINUE;
    IF i = 7 THEN BREAK;
    writeln(i);
  END;
END.",
        expected_output: "1\n2\n4\n5\n6\n",
    },
    BuiltinSample {
        id: "test4",
        title: "Procedures & Functions",
        source_text: "PROGRAM TEST4;
VAR a, b, result: INTEGER;
PROCEDURE greet; BEGIN writeln('Hello from the procedure!'); END;
FUNCTION add(x, y: INTEGER): INTEGER; BEGIN add := x + y; END;
BEGIN
  a := 10; b := 20;
  greet;
  result := add(a, b);
  writeln('Sum is: ', result);
END.",
        expected_output: "Hello from the procedure!\nSum is: 30\n",
    },
    BuiltinSample {
        id: "test5",
        title: "IF / ELSE",
        source_text: "PROGRAM TEST5;
VAR x, y: INTEGER;
BEGIN
  x := 3; y := 99;
  IF x < 5 THEN writeln(x) ELSE writeln(y);
END.",
        expected_output: "3\n",
    },
    BuiltinSample {
        id: "test6",
        title: "Integer add + print",
        source_text: "PROGRAM TEST6;
VAR X: INTEGER;
BEGIN
  X := 10 + 20;
  writeln(X);
END.",
        expected_output: "30\n",
    },
];
