mod helpers;

mod department_test;
mod router_test;
mod virtual_machine_test;
