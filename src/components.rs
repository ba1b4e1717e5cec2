pub mod beta_signup;
pub mod mobile_nav;
