pub mod blatchford;
pub mod child_pugh;
pub mod dlqi;
pub mod glasgow;
pub mod homa_ir;
pub mod imc;
pub mod nihss;
pub mod pasi;
pub mod risk;
pub mod rockall;
pub mod scorad;
