use anchor_lang::prelude::*;

use crate::constants::MAX_IDS_PER_EVENT;

/// Append-only list of schedule ids for one creator or one beneficiary.
/// Grows by one `u64` per append, never pruned.
#[account]
#[derive(Debug)]
pub struct ScheduleIndex {
    /// Creator or beneficiary this index belongs to.
    pub owner: Pubkey,
    pub bump: u8,
    /// Schedule ids in creation order.
    pub ids: Vec<u64>,
}

impl ScheduleIndex {
    /// Account space (discriminator included) for an index holding `len` ids.
    pub const fn space(len: usize) -> usize {
        8 +  // discriminator
        32 + // owner
        1 +  // bump
        4 +  // vec length prefix
        8 * len
    }

    pub fn append(&mut self, id: u64) {
        self.ids.push(id);
    }

    /// `ids` split into runs that each fit one event payload.
    pub fn id_chunks(ids: &[u64]) -> core::slice::Chunks<'_, u64> {
        ids.chunks(MAX_IDS_PER_EVENT)
    }

    /// Index stored at `info`, or `None` if it was never created.
    pub fn load(info: &AccountInfo) -> Result<Option<Self>> {
        if *info.owner != crate::ID || info.data_is_empty() {
            return Ok(None);
        }
        let data = info.try_borrow_data()?;
        let mut slice: &[u8] = &data;
        Ok(Some(Self::try_deserialize(&mut slice)?))
    }

    /// Ids stored at `info`; an index that was never created is empty.
    pub fn load_ids(info: &AccountInfo) -> Result<Vec<u64>> {
        Ok(Self::load(info)?.map(|idx| idx.ids).unwrap_or_default())
    }

    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data;
        self.try_serialize(&mut writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_keep_creation_order_and_duplicates() {
        let owner = Pubkey::new_unique();
        let mut idx = ScheduleIndex {
            owner,
            bump: 253,
            ids: Vec::new(),
        };
        idx.append(4);
        idx.append(9);
        idx.append(9);
        assert_eq!(idx.ids, vec![4, 9, 9]);
        assert_eq!(idx.owner, owner);
        assert_eq!(idx.bump, 253);
    }

    #[test]
    fn id_chunks_cover_every_id_within_return_data_size() {
        let ids: Vec<u64> = (0..300).collect();
        let chunks: Vec<&[u64]> = ScheduleIndex::id_chunks(&ids).collect();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks.concat(), ids);
        for chunk in chunks {
            assert!(chunk.len() <= MAX_IDS_PER_EVENT);
            // borsh: 4-byte length prefix + 8 bytes per id
            assert!(4 + 8 * chunk.len() <= 1024);
        }

        assert_eq!(ScheduleIndex::id_chunks(&[]).count(), 0);
        assert_eq!(ScheduleIndex::id_chunks(&ids[..127]).count(), 1);
        assert_eq!(ScheduleIndex::id_chunks(&ids[..128]).count(), 2);
    }

    #[test]
    fn space_fits_serialized_index() {
        let idx = ScheduleIndex {
            owner: Pubkey::new_unique(),
            bump: 1,
            ids: vec![0, 1, 2],
        };
        let mut buf = Vec::new();
        idx.try_serialize(&mut buf).unwrap();
        assert_eq!(buf.len(), ScheduleIndex::space(3));
        assert_eq!(ScheduleIndex::space(4) - ScheduleIndex::space(3), 8);
    }
}
