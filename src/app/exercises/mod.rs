pub mod arrays;
pub mod choices;
pub mod files;
pub mod matrix;
pub mod misc;
pub mod strings;

pub use arrays::{
    FirstNegativeExercise, MajorityExercise, MaxSubarrayExercise, ProductExceptSelfExercise,
    WindowSumExercise,
};
pub use choices::{CalculatorExercise, MonthsExercise, RoleExercise, StatusExercise};
pub use files::{
    AppendExercise, CopyExercise, RecordsExercise, TextFileExercise, TextMetric, UppercaseExercise,
};
pub use matrix::{MatrixExercise, MatrixOp};
pub use misc::{DiamondExercise, FactorialExercise, SwapExercise};
pub use strings::{
    AnagramExercise, CharClassesExercise, InitialsExercise, LongestWordExercise,
    ReverseWordsExercise, VowelExercise,
};
