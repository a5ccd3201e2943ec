pub mod configuration;

pub mod demonstrator;

pub mod error;

pub mod pipeline {
    pub mod exactdecimal;
    pub mod shortesttext;
    pub mod roundingpipeline;
}

pub mod validator;
