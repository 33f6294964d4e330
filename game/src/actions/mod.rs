mod breeding;
mod planting;
mod processing;
mod progress;
mod shopping;
mod staffing;
mod trading;
