use super::common::*;
use crate::workflows::eligibility::{
    BatchCounts, Field, PartitionLabel, RegistrantRecord, RegistrantTable,
};

fn rows(records: impl Iterator<Item = usize>) -> Vec<usize> {
    records.collect()
}

#[test]
fn sample_batch_splits_in_source_order() {
    let table = sample_table();
    let batch = partitioner().partition(&table);

    assert_eq!(
        rows(batch.eligible.records().map(|record| record.row_number)),
        vec![1]
    );
    assert_eq!(
        rows(batch.ineligible.records().map(|record| record.row_number)),
        vec![2, 3]
    );
    assert_eq!(
        batch.counts(),
        BatchCounts {
            total: 3,
            eligible: 1,
            ineligible: 2,
        }
    );
}

#[test]
fn partitions_carry_their_labels() {
    let table = sample_table();
    let batch = partitioner().partition(&table);

    assert_eq!(batch.eligible.label, PartitionLabel::Eligible);
    assert_eq!(batch.ineligible.label, PartitionLabel::Ineligible);
    assert_eq!(
        batch.partition(PartitionLabel::Ineligible).len(),
        batch.ineligible.len()
    );
    assert!(batch.ineligible.members.iter().all(|member| !member.outcome.is_eligible()));
    assert!(batch.eligible.members.iter().all(|member| member.outcome.is_eligible()));
}

#[test]
fn every_record_lands_in_exactly_one_partition() {
    let records: Vec<RegistrantRecord> = (1..=25)
        .map(|row| match row % 5 {
            0 => valid_record(row).with(Field::Age, 121_i64),
            1 => valid_record(row).with(Field::ActivityHours, 0_i64),
            2 => valid_record(row).with(Field::Email, "nobody"),
            _ => valid_record(row),
        })
        .collect();
    let table = RegistrantTable::new(records);

    let batch = partitioner().partition(&table);
    let counts = batch.counts();
    assert_eq!(counts.total, table.len());
    assert_eq!(counts.eligible + counts.ineligible, table.len());

    let mut seen: Vec<usize> = batch
        .partitions()
        .iter()
        .flat_map(|partition| partition.records().map(|record| record.row_number))
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, (1..=25).collect::<Vec<_>>());

    for partition in batch.partitions() {
        let order: Vec<usize> = partition.records().map(|record| record.row_number).collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn empty_table_yields_empty_partitions() {
    let table = RegistrantTable::default();
    let batch = partitioner().partition(&table);

    assert!(batch.eligible.is_empty());
    assert!(batch.ineligible.is_empty());
    assert_eq!(batch.counts(), BatchCounts::default());
}

#[test]
fn partition_members_reference_source_records() {
    let table = sample_table();
    let batch = partitioner().partition(&table);

    let first = batch.eligible.members[0].record;
    assert!(std::ptr::eq(first, &table.records()[0]));
}
