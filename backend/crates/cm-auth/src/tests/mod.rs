mod evaluator;
mod password;
mod tenant;
